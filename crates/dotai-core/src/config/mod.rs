//! Source configuration: model, loading and validation

mod frontmatter;
mod loader;
mod model;
mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use loader::{ConfigLoader, DirectoryLoader, LoadResult};
pub use model::{Decision, Directive, Hook, Permission, ProjectConfig, Skill, ToolServer, Transport};
pub use validation::validate;

/// A load or validation problem, located by file or entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigIssue {
    pub file: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}
