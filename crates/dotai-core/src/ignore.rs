//! Ignore-file synchronization
//!
//! Derives `.gitignore` patterns covering every generated path and merges
//! them into a managed block at the project root.

use std::collections::BTreeSet;
use std::path::Path;

use dotai_fs::{DotaiPath, NormalizedPath, io};

use crate::{OutputFile, Result};

/// Sentinel comment that opens the managed block.
pub const IGNORE_HEADER: &str = "# dotai outputs";

/// Derive sorted, unique ignore patterns for `files`.
///
/// A path inside a hidden directory yields a directory pattern
/// (`docs/.claude/`), any other path is listed exactly. The state file is
/// always included.
pub fn derive_patterns(files: &[OutputFile]) -> Vec<String> {
    let mut patterns = BTreeSet::new();
    patterns.insert(DotaiPath::StateFile.as_str().to_string());

    for file in files {
        let segments: Vec<&str> = file.path.split('/').collect();
        let hidden = segments.iter().position(|s| s.starts_with('.'));

        match hidden {
            Some(idx) if idx + 1 < segments.len() => {
                patterns.insert(format!("{}/", segments[..=idx].join("/")));
            }
            _ => {
                patterns.insert(file.path.clone());
            }
        }
    }

    patterns.into_iter().collect()
}

/// Merge `patterns` into `existing` ignore-file content.
///
/// Returns the new content and the number of lines added, or `None` when
/// every pattern is already present.
pub fn merge_patterns(existing: &str, patterns: &[String]) -> Option<(String, usize)> {
    let mut lines: Vec<&str> = existing.split('\n').collect();
    let present: BTreeSet<&str> = lines.iter().map(|l| l.trim_end_matches('\r')).collect();

    let new: Vec<&str> = patterns
        .iter()
        .map(String::as_str)
        .filter(|p| !present.contains(p))
        .collect();
    if new.is_empty() {
        return None;
    }

    let header = lines
        .iter()
        .position(|l| l.trim_end_matches('\r') == IGNORE_HEADER);

    let content = match header {
        Some(idx) => {
            lines.splice(idx + 1..idx + 1, new.iter().copied());
            lines.join("\n")
        }
        None => {
            let separator = if existing.is_empty() {
                ""
            } else if existing.ends_with('\n') {
                "\n"
            } else {
                "\n\n"
            };
            format!("{existing}{separator}{IGNORE_HEADER}\n{}\n", new.join("\n"))
        }
    };

    Some((content, new.len()))
}

/// Add any missing patterns for `files` to `<root>/.gitignore`.
///
/// Returns the number of lines added; nothing is written when that is zero.
///
/// # Errors
///
/// Returns an error if the ignore file cannot be read or written.
pub fn apply(root: &Path, files: &[OutputFile]) -> Result<usize> {
    let path = NormalizedPath::new(root).join(DotaiPath::IgnoreFile.as_str());
    let existing = io::read_text_if_exists(&path)?.unwrap_or_default();

    match merge_patterns(&existing, &derive_patterns(files)) {
        Some((content, added)) => {
            io::write_text(&path, &content)?;
            tracing::debug!(added, "updated ignore file");
            Ok(added)
        }
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn files(paths: &[&str]) -> Vec<OutputFile> {
        paths.iter().map(|p| OutputFile::new(*p, "")).collect()
    }

    #[test]
    fn test_derive_patterns() {
        let patterns = derive_patterns(&files(&[
            ".claude/rules/a.md",
            ".claude/skills/x/SKILL.md",
            "CLAUDE.md",
            ".mcp.json",
            "docs-site/.cursor/rules/b.mdc",
            "docs-site/AGENTS.md",
        ]));
        assert_eq!(
            patterns,
            vec![
                ".ai/.state.json",
                ".claude/",
                ".mcp.json",
                "CLAUDE.md",
                "docs-site/.cursor/",
                "docs-site/AGENTS.md",
            ]
        );
    }

    #[test]
    fn test_derive_always_includes_state_file() {
        assert_eq!(derive_patterns(&[]), vec![".ai/.state.json"]);
    }

    #[test]
    fn test_new_block_appended_to_empty() {
        let (content, added) =
            merge_patterns("", &[".ai/.state.json".into(), "CLAUDE.md".into()]).unwrap();
        assert_eq!(added, 2);
        insta::assert_snapshot!(content, @r"
        # dotai outputs
        .ai/.state.json
        CLAUDE.md
        ");
    }

    #[test]
    fn test_new_block_separated_by_one_blank_line() {
        let (content, _) = merge_patterns("target/\n", &["CLAUDE.md".into()]).unwrap();
        assert_eq!(content, "target/\n\n# dotai outputs\nCLAUDE.md\n");

        let (content, _) = merge_patterns("target/", &["CLAUDE.md".into()]).unwrap();
        assert_eq!(content, "target/\n\n# dotai outputs\nCLAUDE.md\n");
    }

    #[test]
    fn test_inserts_below_existing_header() {
        let existing = "node_modules/\n\n# dotai outputs\n.claude/\n\n# mine\nsecret.txt\n";
        let (content, added) =
            merge_patterns(existing, &[".claude/".into(), ".cursor/".into()]).unwrap();
        assert_eq!(added, 1);
        assert_eq!(
            content,
            "node_modules/\n\n# dotai outputs\n.cursor/\n.claude/\n\n# mine\nsecret.txt\n"
        );
    }

    #[test]
    fn test_nothing_new_returns_none() {
        let existing = "# dotai outputs\n.ai/.state.json\n";
        assert!(merge_patterns(existing, &[".ai/.state.json".into()]).is_none());
    }
}
