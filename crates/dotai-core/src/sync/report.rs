//! Reports returned by the engine

use std::path::PathBuf;

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::diff::{FileStatusEntry, StatusCounts};
use crate::{Scope, Target};

/// How a sync run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncOutcome {
    /// Paths were reported, nothing was written
    DryRun,
    /// The operator declined the change set
    Cancelled,
    /// Nothing to write
    UpToDate,
    /// Files were written
    Synced,
}

/// Number of source entities in a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub directives: usize,
    pub skills: usize,
    pub servers: usize,
    pub permissions: usize,
    pub hooks: usize,
}

impl EntityCounts {
    pub fn of(config: &ProjectConfig) -> Self {
        Self {
            directives: config.directives.len(),
            skills: config.skills.len(),
            servers: config.servers.len(),
            permissions: config.permissions.len(),
            hooks: config.hooks.len(),
        }
    }
}

/// What one target produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSummary {
    pub target: Target,
    /// Candidate files before merging
    pub files: usize,
    /// Lossy-mapping warnings from the emitters
    pub warnings: Vec<String>,
}

/// A merged file and where it lands for the run's scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedWrite {
    pub path: String,
    pub target_path: PathBuf,
}

/// Result of [`SyncEngine::sync`](super::SyncEngine::sync).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub outcome: SyncOutcome,
    pub scope: Scope,
    pub entities: EntityCounts,
    pub targets: Vec<TargetSummary>,
    /// The full merged set, in path order
    pub planned: Vec<PlannedWrite>,
    /// Project scope only; empty for dry runs and user scope
    pub statuses: Vec<FileStatusEntry>,
    /// Logical paths actually written
    pub written: Vec<String>,
    /// Lines added to the ignore file
    pub ignore_added: usize,
}

impl SyncReport {
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.targets
            .iter()
            .flat_map(|t| t.warnings.iter().map(String::as_str))
    }

    pub fn conflicts(&self) -> impl Iterator<Item = &FileStatusEntry> {
        self.statuses
            .iter()
            .filter(|e| e.status == crate::FileStatus::Conflict)
    }
}

/// Result of [`SyncEngine::status`](super::SyncEngine::status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Sorted by path
    pub entries: Vec<FileStatusEntry>,
    pub counts: StatusCounts,
    pub has_prior_state: bool,
}

/// Result of [`SyncEngine::check`](super::SyncEngine::check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub scope: Scope,
    pub entities: EntityCounts,
    pub targets: Vec<TargetSummary>,
}

impl CheckReport {
    pub fn has_warnings(&self) -> bool {
        self.targets.iter().any(|t| !t.warnings.is_empty())
    }
}
