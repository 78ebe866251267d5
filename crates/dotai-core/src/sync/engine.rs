//! SyncEngine implementation
//!
//! Drives one run through
//! `Loading -> Validating -> Emitting -> Merging -> (DryRun | Diffing ->
//! (ConflictBlocked | Confirming -> (Cancelled | Writing -> PersistingState ->
//! UpdatingIgnore -> Summary)))`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use dotai_fs::{NormalizedPath, io};

use super::report::{
    CheckReport, EntityCounts, PlannedWrite, StatusReport, SyncOutcome, SyncReport, TargetSummary,
};
use crate::config::{ConfigLoader, DirectoryLoader, LoadResult, ProjectConfig, validate};
use crate::diff::{FileStatus, FileStatusEntry, StatusCounts, diff};
use crate::emit::{EmitResult, Emitter, builtin_emitters, emit_targets};
use crate::paths::{PathResolver, validate_logical_path};
use crate::prompt::{ChangeSet, Confirmation, PlannedChange, Prompter};
use crate::{Error, OutputFile, Result, Scope, Target, ignore, merge, state};

/// Options for a sync run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Targets to emit for; empty means all
    pub targets: Vec<Target>,
    /// Report what would be written, then stop
    pub dry_run: bool,
    pub scope: Scope,
    /// Skip the conflict gate and write the full merged set
    pub force: bool,
    /// Skip the confirmation prompt
    pub yes: bool,
    /// Whether an operator can answer a prompt
    pub interactive: bool,
}

impl SyncOptions {
    /// Selected targets in fixed order, without duplicates.
    pub fn resolved_targets(&self) -> Vec<Target> {
        if self.targets.is_empty() {
            return Target::ALL.to_vec();
        }
        Target::ALL
            .into_iter()
            .filter(|t| self.targets.contains(t))
            .collect()
    }
}

/// Emitted and merged output for one run.
struct Generated {
    config: ProjectConfig,
    per_target: Vec<(Target, EmitResult)>,
    merged: Vec<OutputFile>,
}

impl Generated {
    fn summaries(&self) -> Vec<TargetSummary> {
        self.per_target
            .iter()
            .map(|(target, result)| TargetSummary {
                target: *target,
                files: result.files.len(),
                warnings: result.warnings.clone(),
            })
            .collect()
    }
}

/// Coordinates loading, emitting, merging, diffing and writing.
pub struct SyncEngine {
    resolver: PathResolver,
    loader: Box<dyn ConfigLoader>,
    emitters: Vec<Box<dyn Emitter>>,
}

impl SyncEngine {
    /// Engine reading `.ai/` directories from disk with the built-in emitters.
    pub fn new(project_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        let resolver = PathResolver::new(project_root, home);
        let loader = DirectoryLoader::new(resolver.project_root(), resolver.home());
        Self {
            resolver,
            loader: Box::new(loader),
            emitters: builtin_emitters(),
        }
    }

    /// Replace the configuration loader.
    pub fn with_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Replace the emitter list. Order matters for last-writer-wins merges.
    pub fn with_emitters(mut self, emitters: Vec<Box<dyn Emitter>>) -> Self {
        self.emitters = emitters;
        self
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn load_validated(&self, scope: Scope) -> Result<ProjectConfig> {
        tracing::debug!(%scope, "loading configuration");
        let LoadResult { config, issues } = self.loader.load(scope);
        if !issues.is_empty() {
            return Err(Error::ConfigLoad { issues });
        }

        tracing::debug!("validating configuration");
        let issues = validate(&config);
        if !issues.is_empty() {
            return Err(Error::ConfigInvalid { issues });
        }
        Ok(config)
    }

    fn generate(&self, scope: Scope, targets: &[Target]) -> Result<Generated> {
        let config = self.load_validated(scope)?;

        tracing::debug!(targets = targets.len(), "emitting");
        let per_target = emit_targets(&self.emitters, &config, targets);

        let candidates: Vec<OutputFile> = per_target
            .iter()
            .flat_map(|(_, result)| result.files.iter().cloned())
            .collect();
        for file in &candidates {
            validate_logical_path(&file.path)?;
        }

        tracing::debug!(candidates = candidates.len(), "merging");
        let merged = merge::merge(candidates)?;

        Ok(Generated {
            config,
            per_target,
            merged,
        })
    }

    fn planned(&self, merged: &[OutputFile], scope: Scope) -> Vec<PlannedWrite> {
        merged
            .iter()
            .map(|f| PlannedWrite {
                path: f.path.clone(),
                target_path: self.resolver.resolve(&f.path, scope),
            })
            .collect()
    }

    /// Run a sync.
    ///
    /// Load or validation failures, merge failures, unforced conflicts and
    /// I/O failures are errors; none of them touch the state record or the
    /// ignore file. A declined confirmation returns
    /// [`SyncOutcome::Cancelled`].
    ///
    /// # Errors
    ///
    /// See above. A failed write aborts the remaining writes without
    /// rolling back files already written.
    pub fn sync(&self, options: &SyncOptions, prompter: &mut dyn Prompter) -> Result<SyncReport> {
        let scope = options.scope;
        let targets = options.resolved_targets();
        let generated = self.generate(scope, &targets)?;
        let merged = &generated.merged;

        let mut report = SyncReport {
            outcome: SyncOutcome::DryRun,
            scope,
            entities: EntityCounts::of(&generated.config),
            targets: generated.summaries(),
            planned: self.planned(merged, scope),
            statuses: Vec::new(),
            written: Vec::new(),
            ignore_added: 0,
        };

        if options.dry_run {
            tracing::info!(files = merged.len(), "dry run complete");
            return Ok(report);
        }

        let root = self.resolver.project_root().to_path_buf();
        let project_scope = scope == Scope::Project;

        if project_scope {
            tracing::debug!("diffing against last sync");
            let prior = state::load(&root);
            report.statuses = diff(&self.resolver, scope, merged, prior.as_ref())?;

            let conflicts: Vec<String> = report.conflicts().map(|e| e.path.clone()).collect();
            if !conflicts.is_empty() {
                if options.force {
                    tracing::warn!(count = conflicts.len(), "overwriting conflicting files");
                } else {
                    return Err(Error::Conflicts { paths: conflicts });
                }
            }
        }

        let mut to_write: Vec<&OutputFile> = merged.iter().collect();

        if project_scope && options.interactive && !options.yes {
            let counts = StatusCounts::tally(&report.statuses);
            if counts.changes() > 0 {
                let changes = ChangeSet {
                    changes: report
                        .statuses
                        .iter()
                        .map(|entry| PlannedChange {
                            entry: entry.clone(),
                            target_path: self.resolver.resolve(&entry.path, scope),
                        })
                        .collect(),
                    counts,
                };

                match prompter.confirm(&changes)? {
                    Confirmation::Decline => {
                        report.outcome = SyncOutcome::Cancelled;
                        tracing::info!("sync cancelled");
                        return Ok(report);
                    }
                    Confirmation::Proceed if !options.force => {
                        to_write = filter_changed(merged, &report.statuses);
                    }
                    Confirmation::Proceed => {}
                }
            } else if !options.force {
                report.outcome = SyncOutcome::UpToDate;
                tracing::info!("everything up to date");
                return Ok(report);
            }
        }

        tracing::debug!(files = to_write.len(), "writing");
        for file in to_write {
            let path = NormalizedPath::new(self.resolver.resolve(&file.path, scope));
            io::write_atomic(&path, file.content.as_bytes())?;
            report.written.push(file.path.clone());
        }

        if project_scope {
            tracing::debug!("persisting sync state");
            state::save(&root, merged)?;
            tracing::debug!("updating ignore file");
            report.ignore_added = ignore::apply(&root, merged)?;
        }

        report.outcome = SyncOutcome::Synced;
        tracing::info!(
            written = report.written.len(),
            ignore_added = report.ignore_added,
            "sync complete"
        );
        Ok(report)
    }

    /// Classify every project-scope output path for all targets.
    ///
    /// # Errors
    ///
    /// Returns an error on load, validation or merge failure, or if an
    /// output file cannot be read.
    pub fn status(&self) -> Result<StatusReport> {
        let scope = Scope::Project;
        let generated = self.generate(scope, &Target::ALL)?;
        let prior = state::load(self.resolver.project_root());

        let mut entries = diff(&self.resolver, scope, &generated.merged, prior.as_ref())?;
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(StatusReport {
            counts: StatusCounts::tally(&entries),
            entries,
            has_prior_state: prior.is_some(),
        })
    }

    /// Validate configuration for `scope` and collect per-target warnings.
    ///
    /// # Errors
    ///
    /// Returns an error on load or validation failure.
    pub fn check(&self, scope: Scope) -> Result<CheckReport> {
        let config = self.load_validated(scope)?;
        let per_target = emit_targets(&self.emitters, &config, &Target::ALL);

        Ok(CheckReport {
            scope,
            entities: EntityCounts::of(&config),
            targets: per_target
                .into_iter()
                .map(|(target, result)| TargetSummary {
                    target,
                    files: result.files.len(),
                    warnings: result.warnings,
                })
                .collect(),
        })
    }
}

/// Keep only files whose status is not up to date.
fn filter_changed<'a>(merged: &'a [OutputFile], statuses: &[FileStatusEntry]) -> Vec<&'a OutputFile> {
    let changed: BTreeSet<&str> = statuses
        .iter()
        .filter(|e| e.status != FileStatus::UpToDate)
        .map(|e| e.path.as_str())
        .collect();
    merged
        .iter()
        .filter(|file| changed.contains(file.path.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_targets_keep_fixed_order() {
        let options = SyncOptions {
            targets: vec![Target::Copilot, Target::Claude, Target::Copilot],
            ..Default::default()
        };
        assert_eq!(options.resolved_targets(), vec![Target::Claude, Target::Copilot]);
        assert_eq!(SyncOptions::default().resolved_targets(), Target::ALL.to_vec());
    }

    #[test]
    fn test_filter_changed_drops_up_to_date() {
        let merged = vec![OutputFile::new("a", "1"), OutputFile::new("b", "2")];
        let statuses = vec![
            FileStatusEntry::new("a", FileStatus::UpToDate),
            FileStatusEntry::new("b", FileStatus::Modified),
        ];
        let kept: Vec<&str> = filter_changed(&merged, &statuses)
            .into_iter()
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(kept, vec!["b"]);
    }

    #[test]
    fn test_filter_changed_keeps_merged_order_and_ignores_orphans() {
        let merged = vec![
            OutputFile::new("c", "3"),
            OutputFile::new("a", "1"),
            OutputFile::new("b", "2"),
        ];
        let statuses = vec![
            FileStatusEntry::new("a", FileStatus::Conflict),
            FileStatusEntry::new("b", FileStatus::UpToDate),
            FileStatusEntry::new("c", FileStatus::New),
            FileStatusEntry::new("z", FileStatus::Orphaned),
        ];
        let kept: Vec<&str> = filter_changed(&merged, &statuses)
            .into_iter()
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(kept, vec!["c", "a"]);
    }
}
