//! Generated files

use serde::{Deserialize, Serialize};

/// A file produced for one run, addressed by its logical path.
///
/// Emitters return candidates; after merging there is exactly one
/// `OutputFile` per distinct path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Project-root-relative, slash-separated path
    pub path: String,
    /// Exact file content
    pub content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
