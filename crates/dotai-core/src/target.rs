//! Target tools and output scopes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A consumer tool that receives generated configuration.
///
/// The declaration order is the fixed iteration order used everywhere a
/// run visits targets, which makes last-writer-wins merges deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Claude,
    Cursor,
    Codex,
    Copilot,
}

impl Target {
    /// All targets in iteration order.
    pub const ALL: [Target; 4] = [Target::Claude, Target::Cursor, Target::Codex, Target::Copilot];

    /// Lowercase identifier used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Claude => "claude",
            Target::Cursor => "cursor",
            Target::Codex => "codex",
            Target::Copilot => "copilot",
        }
    }

    /// Human-readable product name.
    pub fn label(&self) -> &'static str {
        match self {
            Target::Claude => "Claude Code",
            Target::Cursor => "Cursor",
            Target::Codex => "Codex",
            Target::Copilot => "GitHub Copilot",
        }
    }

    /// The tool's hidden directory, both in a project and under `~`.
    pub fn hidden_dir(&self) -> &'static str {
        match self {
            Target::Claude => ".claude",
            Target::Cursor => ".cursor",
            Target::Codex => ".codex",
            Target::Copilot => ".copilot",
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" | "claude-code" => Ok(Target::Claude),
            "cursor" => Ok(Target::Cursor),
            "codex" => Ok(Target::Codex),
            "copilot" | "github-copilot" => Ok(Target::Copilot),
            _ => Err(Error::InvalidTarget {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where generated output lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Inside the project tree
    #[default]
    Project,
    /// Under each tool's directory in the user's home
    User,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Project => "project",
            Scope::User => "user",
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" => Ok(Scope::Project),
            "user" | "global" => Ok(Scope::User),
            _ => Err(Error::InvalidScope {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_order_is_fixed() {
        let names: Vec<&str> = Target::ALL.iter().map(Target::as_str).collect();
        assert_eq!(names, vec!["claude", "cursor", "codex", "copilot"]);
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!("Claude".parse::<Target>().unwrap(), Target::Claude);
        assert_eq!("copilot".parse::<Target>().unwrap(), Target::Copilot);
        assert!(matches!(
            "vim".parse::<Target>(),
            Err(Error::InvalidTarget { name }) if name == "vim"
        ));
    }

    #[test]
    fn test_scope_from_str_and_display() {
        assert_eq!("user".parse::<Scope>().unwrap(), Scope::User);
        assert_eq!(Scope::Project.to_string(), "project");
        assert!("galaxy".parse::<Scope>().is_err());
    }
}
