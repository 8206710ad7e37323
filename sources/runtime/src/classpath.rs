use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use support::catalog::{PathPrefix, ARCHIVE_SEPARATOR};
use tracing::{trace, warn};
use url::Url;
use zip::{result::ZipError, ZipArchive};

use crate::{error::LoadError, internal, internalise};

/// Render an absolute path as a `file:/...` location, the form class locations are reported in.
pub fn file_url(path: &Path) -> Result<String, LoadError> {
    let url = Url::from_file_path(path)
        .map_err(|_| internal!("{} is not an absolute path", path.display()))?;

    Ok(url.as_str().replacen("file:///", PathPrefix::file(), 1))
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }

    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

fn is_archive(path: &Path) -> bool {
    if path.is_file() {
        return true;
    }

    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("jar") || ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPathEntry {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ClassPathEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = absolute(path.into());

        if is_archive(&path) {
            ClassPathEntry::Archive(path)
        } else {
            ClassPathEntry::Directory(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ClassPathEntry::Directory(path) | ClassPathEntry::Archive(path) => path,
        }
    }

    /// The code source location of classes loaded from this entry.
    /// Directories end in `/`, archives name the archive file itself.
    pub fn location(&self) -> Result<String, LoadError> {
        match self {
            ClassPathEntry::Directory(path) => {
                let mut url = file_url(path)?;
                if !url.ends_with('/') {
                    url.push('/');
                }

                Ok(url)
            }
            ClassPathEntry::Archive(path) => file_url(path),
        }
    }

    pub fn resource_url(&self, name: &str) -> Result<String, LoadError> {
        match self {
            ClassPathEntry::Directory(path) => file_url(&path.join(name)),
            ClassPathEntry::Archive(_) => Ok(format!(
                "{}{}{}{}",
                PathPrefix::jar(),
                self.location()?,
                ARCHIVE_SEPARATOR,
                name
            )),
        }
    }

    fn open_archive(path: &Path) -> Result<ZipArchive<File>, LoadError> {
        let file = File::open(path).map_err(internalise!())?;
        ZipArchive::new(file).map_err(internalise!())
    }

    pub fn contains(&self, name: &str) -> Result<bool, LoadError> {
        match self {
            ClassPathEntry::Directory(path) => Ok(path.join(name).is_file()),
            ClassPathEntry::Archive(path) => {
                let mut archive = Self::open_archive(path)?;
                let found = archive.by_name(name).is_ok();
                Ok(found)
            }
        }
    }

    pub fn read(&self, name: &str) -> Result<Option<Vec<u8>>, LoadError> {
        match self {
            ClassPathEntry::Directory(path) => {
                let path = path.join(name);
                if !path.is_file() {
                    return Ok(None);
                }

                std::fs::read(path).map(Some).map_err(internalise!())
            }
            ClassPathEntry::Archive(path) => {
                trace!("Reading {} from archive {}", name, path.display());

                let mut archive = Self::open_archive(path)?;
                let mut entry = match archive.by_name(name) {
                    Ok(entry) => entry,
                    Err(ZipError::FileNotFound) => return Ok(None),
                    Err(e) => return Err(internal!(e)),
                };

                let mut bytes = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut bytes).map_err(internalise!())?;

                Ok(Some(bytes))
            }
        }
    }
}

/// The ordered list of class path entries, shared between a loader and the classes it defined.
#[derive(Debug, Clone, Default)]
pub struct ClassPath {
    entries: Arc<RwLock<Vec<ClassPathEntry>>>,
}

impl ClassPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: ClassPathEntry) {
        self.entries.write().push(entry);
    }

    pub fn entries(&self) -> Vec<ClassPathEntry> {
        self.entries.read().clone()
    }

    /// The first entry holding `name`. Entries that cannot be read are skipped.
    pub fn find(&self, name: &str) -> Option<ClassPathEntry> {
        for entry in self.entries.read().iter() {
            match entry.contains(name) {
                Ok(true) => return Some(entry.clone()),
                Ok(false) => {}
                Err(e) => warn!("Skipping class path entry {}: {}", entry.path().display(), e),
            }
        }

        None
    }

    /// The URL of the resource `name`, relative to the class path roots.
    pub fn resource(&self, name: &str) -> Option<String> {
        let entry = self.find(name)?;

        match entry.resource_url(name) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Could not build a URL for {}: {}", name, e);
                None
            }
        }
    }
}
