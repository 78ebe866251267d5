//! Check command implementation

use colored::Colorize;
use dotai_core::Scope;

use super::{Workspace, config_label, print_targets};
use crate::error::Result;
use crate::prompt::plural;

/// Run the check command
///
/// Load and validation failures propagate as errors. Lossy mappings are
/// reported per target but do not fail the command.
pub fn run_check(workspace: &Workspace, scope: Scope) -> Result<()> {
    println!(
        "{} Checking {} configuration...",
        "=>".blue().bold(),
        config_label(scope)
    );

    let report = workspace.engine().check(scope)?;

    println!("{} Config is valid", "OK".green().bold());
    println!();

    println!("{}", "Config summary:".bold());
    for (label, count) in [
        ("Directives", report.entities.directives),
        ("Skills", report.entities.skills),
        ("MCP servers", report.entities.servers),
        ("Permission rules", report.entities.permissions),
        ("Hooks", report.entities.hooks),
    ] {
        if count > 0 {
            println!("  {label}: {count}");
        }
    }

    println!();
    println!("{}", "Target compatibility:".bold());
    println!();
    print_targets(&report.targets, |summary| {
        format!("{} file{}", summary.files, plural(summary.files))
            .dimmed()
            .to_string()
    });

    Ok(())
}
