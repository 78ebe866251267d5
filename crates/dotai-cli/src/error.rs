//! Error types for dotai-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from dotai-core
    #[error(transparent)]
    Core(#[from] dotai_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Extra lines shown under the error headline.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Core(
                dotai_core::Error::ConfigLoad { issues } | dotai_core::Error::ConfigInvalid { issues },
            ) => issues.iter().map(ToString::to_string).collect(),
            Self::Core(dotai_core::Error::Conflicts { paths }) => paths.clone(),
            _ => Vec::new(),
        }
    }

    /// Follow-up advice, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Core(dotai_core::Error::Conflicts { .. }) => {
                Some("Use `dotai sync --force` to overwrite, or resolve the edits by hand.")
            }
            _ => None,
        }
    }
}
