//! Sync command implementation

use colored::Colorize;
use dotai_core::{SyncOptions, SyncOutcome, SyncReport};

use super::{Workspace, config_label, entity_summary, print_targets};
use crate::error::Result;
use crate::prompt::{TerminalPrompter, plural};

/// Run the sync command
///
/// Conflicts and config errors come back as errors; a declined prompt
/// does not.
pub fn run_sync(workspace: &Workspace, options: &SyncOptions) -> Result<()> {
    println!(
        "{} Loading config from {}...",
        "=>".blue().bold(),
        config_label(options.scope)
    );

    let engine = workspace.engine();
    let report = engine.sync(options, &mut TerminalPrompter)?;

    match report.outcome {
        SyncOutcome::DryRun => print_dry_run(&report),
        SyncOutcome::Cancelled => println!("Sync cancelled."),
        SyncOutcome::UpToDate => {
            println!("{} Everything is up to date.", "OK".green().bold());
        }
        SyncOutcome::Synced => print_summary(&report),
    }

    Ok(())
}

fn print_dry_run(report: &SyncReport) {
    let warnings: Vec<&str> = report.warnings().collect();
    if !warnings.is_empty() {
        println!("{}", "Warnings:".yellow());
        for warning in warnings {
            println!("  {} {}", "⚠".yellow(), warning);
        }
        println!();
    }

    println!("{}", "Dry run, files that would be written:".cyan());
    for planned in &report.planned {
        println!("  {}", planned.target_path.display());
    }
}

fn print_summary(report: &SyncReport) {
    if report.ignore_added > 0 {
        let n = report.ignore_added;
        println!(
            "  Updated .gitignore (+{} entr{})",
            n,
            if n == 1 { "y" } else { "ies" }
        );
    }

    let n = report.targets.len();
    println!("{} Synced to {} target{}", "OK".green().bold(), n, plural(n));
    println!();

    let entities = entity_summary(&report.entities);
    print_targets(&report.targets, |_| entities.clone());

    let written = report.written.len();
    println!();
    println!("  {} file{} written.", written, plural(written));
}
