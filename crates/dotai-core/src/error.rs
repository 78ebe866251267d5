//! Error types for dotai-core

use crate::config::ConfigIssue;

/// Result type for dotai-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in dotai-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Failed to load configuration ({} issue(s))", .issues.len())]
    ConfigLoad { issues: Vec<ConfigIssue> },

    /// Configuration parsed but is structurally invalid
    #[error("Invalid configuration ({} issue(s))", .issues.len())]
    ConfigInvalid { issues: Vec<ConfigIssue> },

    /// An emitter produced content that cannot be merged
    #[error("Cannot merge {path}: {message}")]
    Merge { path: String, message: String },

    /// An emitter produced a path that escapes the output root
    #[error("Invalid output path {path:?}: {reason}")]
    InvalidOutputPath { path: String, reason: String },

    /// Files were edited by hand since the last sync
    #[error("{} file(s) changed on disk since last sync", .paths.len())]
    Conflicts { paths: Vec<String> },

    /// The confirmation prompt failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Unknown target tool name
    #[error("Unknown target: {name}")]
    InvalidTarget { name: String },

    /// Unknown scope name
    #[error("Unknown scope: {name}")]
    InvalidScope { name: String },

    /// No home directory could be determined
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from dotai-fs
    #[error(transparent)]
    Fs(#[from] dotai_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
