//! Well-known paths relative to a project (or home) root.

use std::path::Path;

/// Files and directories dotai reads or writes outside of tool outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotaiPath {
    /// The `.ai` directory (source-of-truth configuration root)
    ConfigDir,
    /// The `.ai/.state.json` sync state record
    StateFile,
    /// The `.gitignore` at the project root
    IgnoreFile,
    /// The `directives` directory inside the config root
    DirectivesDir,
    /// The `skills` directory inside the config root
    SkillsDir,
}

impl DotaiPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigDir => ".ai",
            Self::StateFile => ".ai/.state.json",
            Self::IgnoreFile => ".gitignore",
            Self::DirectivesDir => "directives",
            Self::SkillsDir => "skills",
        }
    }
}

/// Candidate names for the main config file, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &["config.toml", "config.yaml", "config.yml"];

impl AsRef<Path> for DotaiPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for DotaiPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DotaiPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
