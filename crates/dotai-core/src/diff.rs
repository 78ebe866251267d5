//! Three-way diff classifier
//!
//! Compares generated content ("ours"), on-disk content ("theirs") and the
//! fingerprint recorded by the last sync ("base") for every output path.

use std::collections::BTreeSet;
use std::fmt;

use dotai_fs::{NormalizedPath, content_fingerprint, io};
use serde::{Deserialize, Serialize};

use crate::paths::PathResolver;
use crate::state::SyncState;
use crate::{OutputFile, Result, Scope};

/// Classification of one output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileStatus {
    /// Nothing on disk yet
    New,
    /// Disk already matches the generated content
    UpToDate,
    /// Disk is what the last sync wrote; safe to regenerate
    Modified,
    /// Disk differs from both the generated content and the last write
    Conflict,
    /// Written by a previous sync, no longer generated
    Orphaned,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::New => "new",
            FileStatus::UpToDate => "up-to-date",
            FileStatus::Modified => "modified",
            FileStatus::Conflict => "conflict",
            FileStatus::Orphaned => "orphaned",
        }
    }

    /// Whether a write would change (or create) this path.
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            FileStatus::New | FileStatus::Modified | FileStatus::Conflict
        )
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single logical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatusEntry {
    pub path: String,
    pub status: FileStatus,
}

impl FileStatusEntry {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Pure classification rule for one generated path.
///
/// `disk` is `None` when nothing exists on disk; `last` is the fingerprint
/// recorded by the previous sync, if any. A missing `last` with differing
/// disk content is a conflict: content we did not write is never
/// overwritten silently.
pub fn classify(disk: Option<&str>, generated: &str, last: Option<&str>) -> FileStatus {
    match disk {
        None => FileStatus::New,
        Some(disk) if disk == generated => FileStatus::UpToDate,
        Some(disk) => match last {
            Some(last) if last == disk => FileStatus::Modified,
            _ => FileStatus::Conflict,
        },
    }
}

/// Classify every generated path, then append orphans from `prior`.
///
/// Generated entries keep input order; orphans follow in path order.
///
/// # Errors
///
/// Returns an error if an existing output file cannot be read.
pub fn diff(
    resolver: &PathResolver,
    scope: Scope,
    generated: &[OutputFile],
    prior: Option<&SyncState>,
) -> Result<Vec<FileStatusEntry>> {
    let mut entries = Vec::with_capacity(generated.len());
    let mut seen = BTreeSet::new();

    for file in generated {
        seen.insert(file.path.as_str());

        let real = NormalizedPath::new(resolver.resolve(&file.path, scope));
        let disk_hash = io::read_bytes_if_exists(&real)?.map(content_fingerprint);
        let generated_hash = content_fingerprint(&file.content);
        let last_hash = prior.and_then(|state| state.fingerprint_for(&file.path));

        let status = classify(disk_hash.as_deref(), &generated_hash, last_hash);
        tracing::trace!(path = %file.path, %status, "classified");
        entries.push(FileStatusEntry::new(file.path.clone(), status));
    }

    if let Some(state) = prior {
        entries.extend(
            state
                .files
                .keys()
                .filter(|path| !seen.contains(path.as_str()))
                .map(|path| FileStatusEntry::new(path.clone(), FileStatus::Orphaned)),
        );
    }

    Ok(entries)
}

/// Per-status totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub new: usize,
    pub up_to_date: usize,
    pub modified: usize,
    pub conflict: usize,
    pub orphaned: usize,
}

impl StatusCounts {
    pub fn tally(entries: &[FileStatusEntry]) -> Self {
        let mut counts = Self::default();
        for entry in entries {
            match entry.status {
                FileStatus::New => counts.new += 1,
                FileStatus::UpToDate => counts.up_to_date += 1,
                FileStatus::Modified => counts.modified += 1,
                FileStatus::Conflict => counts.conflict += 1,
                FileStatus::Orphaned => counts.orphaned += 1,
            }
        }
        counts
    }

    /// Number of paths a write would touch.
    pub fn changes(&self) -> usize {
        self.new + self.modified + self.conflict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "g", None, FileStatus::New)]
    #[case(None, "g", Some("x"), FileStatus::New)]
    #[case(Some("g"), "g", None, FileStatus::UpToDate)]
    #[case(Some("g"), "g", Some("other"), FileStatus::UpToDate)]
    #[case(Some("d"), "g", None, FileStatus::Conflict)]
    #[case(Some("d"), "g", Some("d"), FileStatus::Modified)]
    #[case(Some("d"), "g", Some("other"), FileStatus::Conflict)]
    fn test_classify_rule_table(
        #[case] disk: Option<&str>,
        #[case] generated: &str,
        #[case] last: Option<&str>,
        #[case] expected: FileStatus,
    ) {
        assert_eq!(classify(disk, generated, last), expected);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&FileStatus::UpToDate).unwrap();
        assert_eq!(json, "\"up-to-date\"");
        assert_eq!(FileStatus::UpToDate.to_string(), "up-to-date");
    }

    #[test]
    fn test_counts() {
        let entries = vec![
            FileStatusEntry::new("a", FileStatus::New),
            FileStatusEntry::new("b", FileStatus::UpToDate),
            FileStatusEntry::new("c", FileStatus::Conflict),
            FileStatusEntry::new("d", FileStatus::Orphaned),
        ];
        let counts = StatusCounts::tally(&entries);
        assert_eq!(counts.changes(), 2);
        assert_eq!(counts.orphaned, 1);
        assert_eq!(counts.up_to_date, 1);
    }
}
