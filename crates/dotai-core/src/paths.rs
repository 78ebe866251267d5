//! Logical-to-real path resolution
//!
//! Emitters produce project-relative logical paths. At project scope those
//! land directly under the project root; at user scope they are redirected
//! into each tool's directory under the home directory.

use std::path::{Path, PathBuf};

use crate::{Error, Result, Scope};

/// Per-tool hidden directories. The prefix is stripped and the remainder is
/// re-rooted under `~/<dir>/`.
const TOOL_PREFIXES: &[&str] = &[".claude", ".cursor", ".codex", ".copilot"];

/// Shared-convention directories that keep their prefix and land under
/// `~/.copilot/`.
const COPILOT_SHARED_PREFIXES: &[&str] = &[".github", ".vscode"];

/// Maps logical output paths to real filesystem locations.
#[derive(Debug, Clone)]
pub struct PathResolver {
    project_root: PathBuf,
    home: PathBuf,
}

impl PathResolver {
    /// Create a resolver. `home` is injected and never looked up here.
    pub fn new(project_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            home: home.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Resolve a logical path for the given scope.
    ///
    /// The same `(logical, scope)` always yields the same result.
    pub fn resolve(&self, logical: &str, scope: Scope) -> PathBuf {
        match scope {
            Scope::Project => join_logical(&self.project_root, logical),
            Scope::User => self.resolve_user(logical),
        }
    }

    fn resolve_user(&self, logical: &str) -> PathBuf {
        for prefix in TOOL_PREFIXES {
            if let Some(rest) = strip_dir_prefix(logical, prefix) {
                return join_logical(&self.home.join(prefix), rest);
            }
        }
        for prefix in COPILOT_SHARED_PREFIXES {
            if strip_dir_prefix(logical, prefix).is_some() {
                return join_logical(&self.home.join(".copilot"), logical);
            }
        }
        join_logical(&self.home, logical)
    }
}

/// `Some(rest)` when `logical` is `<prefix>/<rest>`.
fn strip_dir_prefix<'a>(logical: &'a str, prefix: &str) -> Option<&'a str> {
    logical
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
}

fn join_logical(base: &Path, logical: &str) -> PathBuf {
    logical
        .split('/')
        .filter(|s| !s.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment))
}

/// The current user's home directory.
///
/// # Errors
///
/// Returns `Error::HomeDirNotFound` if it cannot be determined.
pub fn default_home() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::HomeDirNotFound)
}

/// Reject logical paths that could escape the output root.
///
/// # Errors
///
/// Returns `Error::InvalidOutputPath` for empty, absolute, drive-prefixed or
/// `..`-containing paths.
pub fn validate_logical_path(logical: &str) -> Result<()> {
    let invalid = |reason: &str| {
        Err(Error::InvalidOutputPath {
            path: logical.to_string(),
            reason: reason.to_string(),
        })
    };

    if logical.trim().is_empty() {
        return invalid("path is empty");
    }
    if logical.starts_with('/') || logical.starts_with('\\') {
        return invalid("path is absolute");
    }
    if logical.len() >= 2 && logical.as_bytes()[1] == b':' {
        return invalid("path has a drive prefix");
    }
    if logical.split(['/', '\\']).any(|segment| segment == "..") {
        return invalid("path contains '..'");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn resolver() -> PathResolver {
        PathResolver::new("/work/project", "/home/dev")
    }

    #[rstest]
    #[case("CLAUDE.md", "/work/project/CLAUDE.md")]
    #[case(".claude/rules/style.md", "/work/project/.claude/rules/style.md")]
    #[case(".github/copilot-instructions.md", "/work/project/.github/copilot-instructions.md")]
    fn test_project_scope_joins_under_root(#[case] logical: &str, #[case] expected: &str) {
        assert_eq!(
            resolver().resolve(logical, Scope::Project),
            PathBuf::from(expected)
        );
    }

    #[rstest]
    #[case(".claude/skills/lint/SKILL.md", "/home/dev/.claude/skills/lint/SKILL.md")]
    #[case(".cursor/mcp.json", "/home/dev/.cursor/mcp.json")]
    #[case(".codex/config.toml", "/home/dev/.codex/config.toml")]
    #[case(".copilot/agents/a.md", "/home/dev/.copilot/agents/a.md")]
    #[case(".github/copilot-instructions.md", "/home/dev/.copilot/.github/copilot-instructions.md")]
    #[case(".vscode/mcp.json", "/home/dev/.copilot/.vscode/mcp.json")]
    #[case("CLAUDE.md", "/home/dev/CLAUDE.md")]
    #[case(".mcp.json", "/home/dev/.mcp.json")]
    fn test_user_scope_redirects(#[case] logical: &str, #[case] expected: &str) {
        assert_eq!(resolver().resolve(logical, Scope::User), PathBuf::from(expected));
    }

    #[test]
    fn test_prefix_must_be_whole_segment() {
        // `.claudette` is not the `.claude` directory
        assert_eq!(
            resolver().resolve(".claudette/x.md", Scope::User),
            PathBuf::from("/home/dev/.claudette/x.md")
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let r = resolver();
        for scope in [Scope::Project, Scope::User] {
            assert_eq!(
                r.resolve(".codex/config.toml", scope),
                r.resolve(".codex/config.toml", scope)
            );
        }
    }

    #[rstest]
    #[case("")]
    #[case("/etc/passwd")]
    #[case("../outside.md")]
    #[case("docs/../../x.md")]
    #[case("C:/windows.md")]
    fn test_validate_rejects_escaping_paths(#[case] logical: &str) {
        assert!(matches!(
            validate_logical_path(logical),
            Err(Error::InvalidOutputPath { .. })
        ));
    }

    #[rstest]
    #[case("CLAUDE.md")]
    #[case("docs-site/.claude/rules/a.md")]
    #[case("..hidden/file.md")]
    fn test_validate_accepts_relative_paths(#[case] logical: &str) {
        assert!(validate_logical_path(logical).is_ok());
    }
}
