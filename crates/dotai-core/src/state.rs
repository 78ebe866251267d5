//! Sync state persistence
//!
//! The state record lists every path the previous successful project-scope
//! sync wrote, with the fingerprint of what was written. It is always
//! replaced wholesale, so a path dropped from the write set disappears from
//! the record and later shows up as orphaned.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use dotai_fs::{DotaiPath, NormalizedPath, content_fingerprint, io};
use serde::{Deserialize, Serialize};

use crate::{OutputFile, Result};

/// Persisted record of the last successful sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncState {
    /// When the record was written
    pub last_sync: DateTime<Utc>,
    /// Logical path to content fingerprint
    pub files: BTreeMap<String, String>,
}

impl SyncState {
    /// Build a fresh record for `files`, stamped with the current time.
    pub fn capture(files: &[OutputFile]) -> Self {
        Self {
            last_sync: Utc::now(),
            files: files
                .iter()
                .map(|f| (f.path.clone(), content_fingerprint(&f.content)))
                .collect(),
        }
    }

    /// Fingerprint recorded for `path`, if any.
    pub fn fingerprint_for(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Serialize as pretty JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Location of the state file under `root`.
pub fn state_path(root: &Path) -> NormalizedPath {
    NormalizedPath::new(root).join(DotaiPath::StateFile.as_str())
}

/// Load the state record under `root`.
///
/// Any failure (missing, unreadable, corrupt) means "never synced".
pub fn load(root: &Path) -> Option<SyncState> {
    let path = state_path(root);
    let content = match io::read_text_if_exists(&path) {
        Ok(Some(content)) => content,
        Ok(None) => {
            tracing::debug!(path = %path, "no sync state recorded");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "sync state unreadable, treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "sync state corrupt, treating as absent");
            None
        }
    }
}

/// Replace the state record under `root` with fingerprints of `files`.
///
/// Written atomically under an exclusive lock; `.ai/` is created if needed.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or written.
pub fn save(root: &Path, files: &[OutputFile]) -> Result<SyncState> {
    let state = SyncState::capture(files);
    io::write_text(&state_path(root), &state.to_json()?)?;
    tracing::debug!(files = state.files.len(), "saved sync state");
    Ok(state)
}
