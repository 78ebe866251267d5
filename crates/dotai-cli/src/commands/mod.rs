//! Command implementations for dotai CLI

pub mod check;
pub mod status;
pub mod sync;

use std::path::PathBuf;

use colored::Colorize;
use dotai_core::{EntityCounts, Scope, SyncEngine, TargetSummary};

use crate::error::{CliError, Result};
use crate::prompt::plural;

pub use check::run_check;
pub use status::run_status;
pub use sync::run_sync;

/// Project root and home directory for one invocation.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub project: PathBuf,
    pub home: PathBuf,
}

impl Workspace {
    /// Resolve `--project` (default: current dir) and `--home` (default: the
    /// platform home directory).
    pub fn resolve(project: Option<PathBuf>, home: Option<PathBuf>) -> Result<Self> {
        let project = match project {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let project = dunce::canonicalize(&project).map_err(|e| {
            CliError::user(format!(
                "Cannot open project directory {}: {}",
                project.display(),
                e
            ))
        })?;

        let home = match home {
            Some(path) => path,
            None => dotai_core::paths::default_home()?,
        };

        tracing::debug!(project = %project.display(), home = %home.display(), "resolved workspace");
        Ok(Self { project, home })
    }

    pub fn engine(&self) -> SyncEngine {
        SyncEngine::new(self.project.clone(), self.home.clone())
    }
}

/// Where configuration is read from, for messages.
pub(crate) fn config_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Project => ".ai/",
        Scope::User => "~/.ai/",
    }
}

/// "2 directives, 1 skill" or "no entities".
pub(crate) fn entity_summary(counts: &EntityCounts) -> String {
    let parts: Vec<String> = [
        (counts.directives, "directive"),
        (counts.skills, "skill"),
        (counts.servers, "MCP server"),
        (counts.permissions, "permission rule"),
        (counts.hooks, "hook"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{count} {label}{}", plural(count)))
    .collect();

    if parts.is_empty() {
        "no entities".to_string()
    } else {
        parts.join(", ")
    }
}

/// One line per target plus its warnings, labels padded to a column.
pub(crate) fn print_targets(targets: &[TargetSummary], detail: impl Fn(&TargetSummary) -> String) {
    let width = targets
        .iter()
        .map(|t| t.target.label().len())
        .max()
        .unwrap_or(0);

    for summary in targets {
        let icon = if summary.warnings.is_empty() {
            "✓".green()
        } else {
            "⚠".yellow()
        };
        println!(
            "  {} {:<width$}  {}",
            icon,
            summary.target.label(),
            detail(summary),
            width = width
        );
        for warning in &summary.warnings {
            println!("  {:<width$}     {}", "", warning.yellow(), width = width);
        }
    }
}
