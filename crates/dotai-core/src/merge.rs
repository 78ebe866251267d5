//! Merge resolver
//!
//! Collapses candidate files that share a logical path into one file. The
//! strategy is chosen purely by extension.

use std::collections::BTreeMap;

use dotai_fs::NormalizedPath;
use serde_json::Value;

use crate::{Error, OutputFile, Result};

/// How colliding candidates for one path are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// `.json`: recursive object merge, array concatenation
    Structured,
    /// `.toml`: bodies joined by a blank line
    Sections,
    /// `.md`: bodies joined by a horizontal rule
    Prose,
    /// Anything else: the last candidate in iteration order is kept
    LastWriterWins,
}

impl MergeStrategy {
    pub fn for_path(path: &str) -> Self {
        let normalized = NormalizedPath::new(path);
        match normalized.extension().map(str::to_lowercase).as_deref() {
            Some("json") => MergeStrategy::Structured,
            Some("toml") => MergeStrategy::Sections,
            Some("md") => MergeStrategy::Prose,
            _ => MergeStrategy::LastWriterWins,
        }
    }
}

/// Merge candidates into exactly one file per distinct path.
///
/// Output is ordered by path. Within a path, candidates are combined in the
/// order they arrived, which callers keep as target-major, emitter-minor.
///
/// # Errors
///
/// Returns `Error::Merge` if a candidate for a `.json` path that collides
/// with another candidate does not parse.
pub fn merge(candidates: Vec<OutputFile>) -> Result<Vec<OutputFile>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for file in candidates {
        groups.entry(file.path).or_default().push(file.content);
    }

    groups
        .into_iter()
        .map(|(path, contents)| {
            let content = merge_group(&path, contents)?;
            Ok(OutputFile { path, content })
        })
        .collect()
}

fn merge_group(path: &str, mut contents: Vec<String>) -> Result<String> {
    if contents.len() == 1 {
        return Ok(contents.pop().unwrap_or_default());
    }

    tracing::debug!(path, candidates = contents.len(), "merging colliding outputs");

    match MergeStrategy::for_path(path) {
        MergeStrategy::Structured => merge_json(path, &contents),
        MergeStrategy::Sections => Ok(join_trimmed(&contents, "\n\n")),
        MergeStrategy::Prose => Ok(join_trimmed(&contents, "\n\n---\n\n")),
        MergeStrategy::LastWriterWins => Ok(contents.pop().unwrap_or_default()),
    }
}

fn join_trimmed(contents: &[String], separator: &str) -> String {
    let bodies: Vec<&str> = contents.iter().map(|c| c.trim()).collect();
    format!("{}\n", bodies.join(separator))
}

fn merge_json(path: &str, contents: &[String]) -> Result<String> {
    let mut merged: Option<Value> = None;

    for content in contents {
        let value: Value = serde_json::from_str(content).map_err(|e| Error::Merge {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        merged = Some(match merged {
            None => value,
            Some(mut base) => {
                deep_merge(&mut base, value);
                base
            }
        });
    }

    // serde_json's map is key-ordered, so output keys come out sorted
    let mut out = serde_json::to_string_pretty(&merged.unwrap_or(Value::Null))?;
    out.push('\n');
    Ok(out)
}

/// Fold `other` into `base`.
///
/// Objects merge key-by-key, arrays concatenate without de-duplication, and
/// any other pairing takes the later value.
pub fn deep_merge(base: &mut Value, other: Value) {
    match (base, other) {
        (Value::Object(base_map), Value::Object(other_map)) => {
            for (key, other_val) in other_map {
                match base_map.get_mut(&key) {
                    Some(base_val) => deep_merge(base_val, other_val),
                    None => {
                        base_map.insert(key, other_val);
                    }
                }
            }
        }
        (Value::Array(base_items), Value::Array(other_items)) => {
            base_items.extend(other_items);
        }
        (base, other) => {
            *base = other;
        }
    }
}
