//! dotai CLI
//!
//! Projects the `.ai/` directory into Claude Code, Cursor, Codex and
//! GitHub Copilot configuration.

mod cli;
mod commands;
mod error;
mod logging;
mod prompt;

use std::io::IsTerminal;

use clap::Parser;
use colored::Colorize;
use dotai_core::SyncOptions;

use cli::{Cli, Commands, resolve_targets};
use commands::Workspace;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(e: &CliError) {
    eprintln!("{}: {}", "error".red().bold(), e);
    for line in e.details() {
        eprintln!("  {} {}", "!".red(), line);
    }
    if let Some(hint) = e.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("verbose mode enabled");

    let Some(command) = cli.command else {
        println!("{} keeps AI tool configuration in sync", "dotai".green().bold());
        println!();
        println!("Run {} for available commands.", "dotai --help".cyan());
        return Ok(());
    };

    let workspace = Workspace::resolve(cli.project, cli.home)?;
    execute_command(&workspace, command)
}

fn execute_command(workspace: &Workspace, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync {
            targets,
            dry_run,
            scope,
            force,
            yes,
        } => {
            let options = SyncOptions {
                targets: resolve_targets(&targets),
                dry_run,
                scope,
                force,
                yes,
                interactive: is_interactive(),
            };
            commands::run_sync(workspace, &options)
        }
        Commands::Status { json } => commands::run_status(workspace, json),
        Commands::Check { scope } => commands::run_check(workspace, scope),
    }
}

/// An operator can answer a prompt only if both ends are a terminal.
fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
