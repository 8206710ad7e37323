use std::{fmt, path::PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use support::{
    catalog::{PathPrefix, PathSuffix, ARCHIVE_SEPARATOR},
    platform::{HostPlatform, Platform},
};
use tracing::{debug, trace};
use url::Url;

use crate::{
    error::{InvalidLocationError, NullUnitError},
    unit::CodeUnit,
};

lazy_static! {
    /// `file:C:...`, a drive letter straight after the scheme.
    static ref DRIVE_LETTER_PATH: Regex =
        Regex::new(&format!("^{}[A-Za-z]:", regex::escape(file_scheme())))
            .expect("drive letter pattern to compile");
}

/// `file:`, the file prefix without its leading slash.
fn file_scheme() -> &'static str {
    PathPrefix::file().trim_end_matches('/')
}

/// A URL-shaped string naming the class path entry a class came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocation(String);

impl ResolvedLocation {
    /// Wrap a location the runtime already vouches for.
    pub fn verbatim(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Wrap a derived location, checking that it is a well formed URL.
    pub fn parse(location: impl Into<String>) -> Result<Self, InvalidLocationError> {
        let location = location.into();

        match Url::parse(&location) {
            Ok(_) => Ok(Self(location)),
            Err(e) => Err(InvalidLocationError::Malformed(location, e)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_archive(&self) -> bool {
        self.0.starts_with(PathPrefix::jar())
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResolvedLocation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ResolvedLocation> for String {
    fn from(location: ResolvedLocation) -> Self {
        location.0
    }
}

/// Finds the class path entry (directory or archive) a class was loaded from.
///
/// ```ignore
/// let url = ClassLocation::new(&cls).to_url()?;
/// let root = ClassLocation::new(&cls).to_file()?;
/// ```
#[derive(Debug)]
pub struct ClassLocation<'a, U: CodeUnit + ?Sized, P: Platform = HostPlatform> {
    unit: &'a U,
    platform: P,
}

impl<'a, U: CodeUnit + ?Sized> ClassLocation<'a, U> {
    pub fn new(unit: &'a U) -> Self {
        Self {
            unit,
            platform: HostPlatform,
        }
    }

    pub fn of(unit: Option<&'a U>) -> Result<Self, NullUnitError> {
        unit.map(Self::new).ok_or(NullUnitError)
    }
}

impl<'a, U: CodeUnit + ?Sized, P: Platform> ClassLocation<'a, U, P> {
    pub fn with_platform<Q: Platform>(self, platform: Q) -> ClassLocation<'a, U, Q> {
        ClassLocation {
            unit: self.unit,
            platform,
        }
    }

    /// The location of the class path entry the class was loaded from.
    ///
    /// The class's own code source wins when it has one. Otherwise the class file is
    /// looked up as a resource and its package path is cut off, e.g.
    /// `file:/path/to/root/package/Hoge.class` gives `file:/path/to/root` and
    /// `jar:file:/path/to/hoge.jar!/package/Hoge.class` gives `file:/path/to/hoge.jar`.
    pub fn to_url(&self) -> Result<ResolvedLocation, InvalidLocationError> {
        if let Some(location) = self.unit.code_source_location() {
            debug!("Code source location: {}", location);
            return Ok(ResolvedLocation::verbatim(location));
        }

        let class_name = format!("{}{}", self.unit.simple_name(), PathSuffix::class());
        let url = self
            .unit
            .resource(&class_name)
            .ok_or_else(|| InvalidLocationError::NotFound(class_name.clone()))?;

        let suffix = format!(
            "{}{}",
            self.unit.canonical_name().replace('.', "/"),
            PathSuffix::class()
        );

        // Class path resources come back percent-encoded, `caf%C3%A9/Hoge.class`.
        let encoded = encode_path(&suffix);
        let matched = if url.ends_with(encoded.as_str()) {
            encoded.len()
        } else if url.ends_with(suffix.as_str()) {
            suffix.len()
        } else {
            return Err(InvalidLocationError::InvalidSuffix(url));
        };

        let root = &url[..url.len() - matched];

        debug!("Resource location: {} (root {})", url, root);
        ResolvedLocation::parse(strip_archive_prefix(root))
    }

    /// The directory or archive file the class was loaded from.
    pub fn to_file(&self) -> Result<PathBuf, InvalidLocationError> {
        let location = self.to_url()?;
        let path = file_location(location.as_str(), &self.platform);

        to_path(&path, location.as_str())
    }
}

/// Encode `path` the way file URLs spell their path segments.
fn encode_path(path: &str) -> String {
    let Ok(mut url) = Url::parse(PathPrefix::file()) else {
        return path.to_string();
    };

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().extend(path.split('/'));
    }

    url.path().trim_start_matches('/').to_string()
}

/// `jar:file:/a/b.jar!/` -> `file:/a/b.jar`, `file:/a/root/` -> `file:/a/root`
fn strip_archive_prefix(root: &str) -> String {
    if let Some(archive) = root.strip_prefix(PathPrefix::jar()) {
        return archive
            .strip_suffix(ARCHIVE_SEPARATOR)
            .unwrap_or(archive)
            .to_string();
    }

    match root.strip_suffix('/') {
        Some(dir) if dir.len() >= PathPrefix::file().len() => dir.to_string(),
        _ => root.to_string(),
    }
}

/// Reduce a location to the URL of a file on disk: archive locations are cut down to the
/// archive itself and, on Windows, `file:C:...` gets the slash it is missing.
pub fn file_location(location: &str, platform: &impl Platform) -> String {
    let mut path = location.to_string();

    if let Some(archive) = path.strip_prefix(PathPrefix::jar()) {
        path = match archive.find(ARCHIVE_SEPARATOR) {
            Some(idx) => archive[..idx].to_string(),
            None => archive.to_string(),
        };
    }

    if platform.is_windows() && DRIVE_LETTER_PATH.is_match(&path) {
        trace!("Rewriting drive letter path {}", path);
        path = format!("{}{}", PathPrefix::file(), &path[file_scheme().len()..]);
    }

    path
}

/// Turn a `file:` URL into a path. `original` is reported if nothing usable is left.
pub fn to_path(path: &str, original: &str) -> Result<PathBuf, InvalidLocationError> {
    if let Some(file) = Url::parse(path).ok().and_then(|url| url.to_file_path().ok()) {
        return Ok(file);
    }

    if path.starts_with(PathPrefix::file()) {
        debug!("Falling back to the raw path of {}", path);
        return Ok(PathBuf::from(&path[file_scheme().len()..]));
    }

    Err(InvalidLocationError::InvalidUrl(original.to_string()))
}
