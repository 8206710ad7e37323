use support::names;
use tracing::trace;

use crate::{classpath::ClassPath, security::ProtectionDomain};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassVersion {
    pub major: u16,
    pub minor: u16,
}

/// A class defined by a [`ClassLoader`](super::loader::ClassLoader).
#[derive(Debug)]
pub struct Class {
    name: String,
    version: ClassVersion,
    protection_domain: ProtectionDomain,
    class_path: ClassPath,
}

impl Class {
    pub fn new(
        name: String,
        version: ClassVersion,
        protection_domain: ProtectionDomain,
        class_path: ClassPath,
    ) -> Self {
        Self {
            name,
            version,
            protection_domain,
            class_path,
        }
    }

    /// The binary name, e.g. `com.example.Outer$Inner`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }

    pub fn canonical_name(&self) -> String {
        names::canonical_name(&self.name)
    }

    pub fn package_path(&self) -> String {
        names::package_path(&self.name)
    }

    pub fn version(&self) -> ClassVersion {
        self.version
    }

    pub fn protection_domain(&self) -> &ProtectionDomain {
        &self.protection_domain
    }

    /// Locate a resource relative to this class.
    ///
    /// Names starting with `/` are looked up from the class path roots, anything else
    /// from this class's package directory. Returns the resource URL, or `None` when no
    /// class path entry holds it.
    pub fn resource(&self, name: &str) -> Option<String> {
        let resolved = self.resolve_resource_name(name);
        trace!("Resource {} of {} resolves to {}", name, self.name, resolved);

        self.class_path.resource(&resolved)
    }

    fn resolve_resource_name(&self, name: &str) -> String {
        if let Some(absolute) = name.strip_prefix('/') {
            return absolute.to_string();
        }

        let package = self.package_path();
        if package.is_empty() {
            name.to_string()
        } else {
            format!("{package}/{name}")
        }
    }
}
