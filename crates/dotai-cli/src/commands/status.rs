//! Status command implementation

use colored::Colorize;
use dotai_core::{FileStatus, StatusReport};

use super::Workspace;
use crate::error::Result;
use crate::prompt::paint;

/// Run the status command
///
/// Classifies every generated project file against disk and the last
/// recorded sync. Never writes.
pub fn run_status(workspace: &Workspace, json: bool) -> Result<()> {
    let report = workspace.engine().status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn icon(status: FileStatus) -> &'static str {
    match status {
        FileStatus::New => "+",
        FileStatus::UpToDate => "=",
        FileStatus::Modified => "~",
        FileStatus::Conflict => "!",
        FileStatus::Orphaned => "-",
    }
}

fn describe(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Conflict => "conflict (manually edited)",
        FileStatus::Orphaned => "orphaned (no longer generated)",
        other => other.as_str(),
    }
}

fn print_report(report: &StatusReport) {
    if !report.has_prior_state {
        println!(
            "No previous sync state found. Run {} first.",
            "dotai sync".cyan()
        );
        println!();
    }

    println!("{}", "File status:".bold());
    println!();
    for entry in &report.entries {
        println!(
            "  {} {}  {}",
            paint(entry.status, icon(entry.status).to_string()),
            entry.path,
            describe(entry.status).dimmed()
        );
    }

    let counts = &report.counts;
    let parts: Vec<String> = [
        (counts.new, "new", FileStatus::New),
        (counts.modified, "modified", FileStatus::Modified),
        (counts.up_to_date, "up-to-date", FileStatus::UpToDate),
        (counts.conflict, "conflicts", FileStatus::Conflict),
        (counts.orphaned, "orphaned", FileStatus::Orphaned),
    ]
    .into_iter()
    .filter(|(count, _, _)| *count > 0)
    .map(|(count, label, status)| paint(status, format!("{count} {label}")).to_string())
    .collect();

    println!();
    if parts.is_empty() {
        println!("  No generated files.");
    } else {
        println!("  {}", parts.join(", "));
    }

    if counts.conflict > 0 {
        println!();
        println!(
            "  Use {} to overwrite conflicting files.",
            "dotai sync --force".bold()
        );
    }
}
