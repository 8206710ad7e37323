/// Where a class was loaded from: the class path entry that supplied its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSource {
    location: Option<String>,
}

impl CodeSource {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
        }
    }

    pub fn unknown() -> Self {
        Self { location: None }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectionDomain {
    pub code_source: Option<CodeSource>,
}

impl ProtectionDomain {
    pub fn new(code_source: CodeSource) -> Self {
        Self {
            code_source: Some(code_source),
        }
    }

    /// Classes defined at runtime carry no code source at all.
    pub fn empty() -> Self {
        Self { code_source: None }
    }

    pub fn location(&self) -> Option<&str> {
        self.code_source.as_ref().and_then(CodeSource::location)
    }
}
