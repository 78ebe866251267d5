//! Slash-separated paths

use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem path stored with `/` separators.
///
/// Output paths are compared, sorted and fingerprinted as strings, so the
/// separator must not depend on the platform that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Platform path for handing to `std::fs`.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Append a relative, slash-separated tail. `""` and `"."` are no-ops.
    pub fn join(&self, tail: &str) -> Self {
        let tail = tail.replace('\\', "/");
        match (self.0.as_str(), tail.as_str()) {
            (_, "" | ".") => self.clone(),
            ("", _) => Self(tail),
            (base, _) if base.ends_with('/') => Self(format!("{base}{tail}")),
            (base, _) => Self(format!("{base}/{tail}")),
        }
    }

    /// Last non-empty component.
    pub fn file_name(&self) -> Option<&str> {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the file name; dotfiles such as `.gitignore` have none.
    pub fn extension(&self) -> Option<&str> {
        match self.file_name()?.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Some(ext),
            _ => None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
