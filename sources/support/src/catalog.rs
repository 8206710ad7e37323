use std::fmt;

use enum_as_inner::EnumAsInner;

/// A closed set of constant path tokens, each keyed by a stable integer code.
pub trait Catalog: Sized + Copy + 'static {
    fn variants() -> &'static [Self];
    fn code(&self) -> u32;
    fn literal(&self) -> &'static str;

    fn from_code(code: u32) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.code() == code)
    }
}

/// Prefixes found at the start of class location URLs.
#[derive(EnumAsInner, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PathPrefix {
    Jar,  // jar:
    File, // file:/
}

impl PathPrefix {
    pub fn jar() -> &'static str {
        PathPrefix::Jar.literal()
    }

    pub fn file() -> &'static str {
        PathPrefix::File.literal()
    }
}

impl Catalog for PathPrefix {
    fn variants() -> &'static [Self] {
        &[PathPrefix::Jar, PathPrefix::File]
    }

    fn code(&self) -> u32 {
        match self {
            PathPrefix::Jar => 0,
            PathPrefix::File => 1,
        }
    }

    fn literal(&self) -> &'static str {
        match self {
            PathPrefix::Jar => "jar:",
            PathPrefix::File => "file:/",
        }
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Suffixes found at the end of class resource names.
#[derive(EnumAsInner, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PathSuffix {
    Class, // .class
}

impl PathSuffix {
    pub fn class() -> &'static str {
        PathSuffix::Class.literal()
    }
}

impl Catalog for PathSuffix {
    fn variants() -> &'static [Self] {
        &[PathSuffix::Class]
    }

    fn code(&self) -> u32 {
        match self {
            PathSuffix::Class => 0,
        }
    }

    fn literal(&self) -> &'static str {
        match self {
            PathSuffix::Class => ".class",
        }
    }
}

impl fmt::Display for PathSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

/// Marks the boundary between an archive's own path and an entry inside it.
pub const ARCHIVE_SEPARATOR: &str = "!/";
