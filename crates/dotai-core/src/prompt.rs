//! Confirmation before writing

use std::path::PathBuf;

use crate::Result;
use crate::diff::{FileStatusEntry, StatusCounts};

/// Operator's answer to a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    /// Declined or cancelled. Not an error.
    Decline,
}

/// One row of a change set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChange {
    pub entry: FileStatusEntry,
    /// Where the file would be written
    pub target_path: PathBuf,
}

/// Everything a prompter needs to ask for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    pub changes: Vec<PlannedChange>,
    pub counts: StatusCounts,
}

impl ChangeSet {
    /// Number of paths that would be created or overwritten.
    pub fn change_count(&self) -> usize {
        self.counts.changes()
    }
}

/// Asks the operator whether to apply a change set.
pub trait Prompter {
    /// # Errors
    ///
    /// Returns an error only when the prompt itself cannot be shown.
    fn confirm(&mut self, changes: &ChangeSet) -> Result<Confirmation>;
}

/// Always proceeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, _changes: &ChangeSet) -> Result<Confirmation> {
        Ok(Confirmation::Proceed)
    }
}
