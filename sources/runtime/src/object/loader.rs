use std::{collections::HashMap, path::PathBuf, sync::Arc};

use bytes::Buf;
use support::{catalog::PathSuffix, names};
use tracing::debug;

use crate::{
    classpath::{ClassPath, ClassPathEntry},
    error::LoadError,
    security::{CodeSource, ProtectionDomain},
};

use super::class::{Class, ClassVersion};

pub const MAGIC: u32 = 0xCAFEBABE;

/// JDK 1.0.2
pub const MIN_MAJOR_VERSION: u16 = 45;

pub struct ClassLoader {
    class_path: ClassPath,
    classes: HashMap<String, Arc<Class>>,
}

impl ClassLoader {
    pub fn new() -> Self {
        Self {
            class_path: ClassPath::new(),
            classes: HashMap::new(),
        }
    }

    /// Define a class from raw classfile bytes. Classes defined without a code source
    /// can still locate their resources through this loader's class path.
    pub fn for_bytes(
        &mut self,
        name: &str,
        bytes: &[u8],
        protection_domain: ProtectionDomain,
    ) -> Result<Arc<Class>, LoadError> {
        let name = name.replace('/', ".");
        let version = read_version(&name, bytes)?;

        let cls = Arc::new(Class::new(
            name.clone(),
            version,
            protection_domain,
            self.class_path.clone(),
        ));

        self.classes.insert(name, cls.clone());

        Ok(cls)
    }

    /// Load a class by binary (`com.example.Hoge`) or internal (`com/example/Hoge`) name.
    pub fn for_name(&mut self, name: &str) -> Result<Arc<Class>, LoadError> {
        let name = name.replace('/', ".");
        let formatted_name = format!("{}{}", names::internal_name(&name), PathSuffix::class());

        if let Some(cls) = self.classes.get(&name) {
            debug!("Fast path: {} ({})", name, formatted_name);
            return Ok(cls.clone());
        }

        debug!("Slow path: {} ({})", name, formatted_name);

        let entry = self
            .class_path
            .find(&formatted_name)
            .ok_or_else(|| LoadError::ClassNotFound(formatted_name.clone()))?;

        let bytes = entry
            .read(&formatted_name)?
            .ok_or_else(|| LoadError::ClassNotFound(formatted_name.clone()))?;

        let code_source = CodeSource::new(entry.location()?);
        self.for_bytes(&name, &bytes, ProtectionDomain::new(code_source))
    }

    pub fn classes(&self) -> &HashMap<String, Arc<Class>> {
        &self.classes
    }

    pub fn class_path(&self) -> &ClassPath {
        &self.class_path
    }

    pub fn add_path(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.class_path.push(ClassPathEntry::new(path));
        self
    }
}

fn read_version(name: &str, mut bytes: &[u8]) -> Result<ClassVersion, LoadError> {
    let format_error = |reason: String| LoadError::ClassFormat {
        name: name.to_string(),
        reason,
    };

    if bytes.remaining() < 8 {
        return Err(format_error(format!(
            "expected at least 8 header bytes, got {}",
            bytes.remaining()
        )));
    }

    let magic = bytes.get_u32();
    if magic != MAGIC {
        return Err(format_error(format!("bad magic {:#x}", magic)));
    }

    let minor = bytes.get_u16();
    let major = bytes.get_u16();

    if major < MIN_MAJOR_VERSION {
        return Err(format_error(format!("unsupported major version {}", major)));
    }

    Ok(ClassVersion { major, minor })
}
