//! CLI argument parsing using clap
//!
//! Defines the command-line interface structure for dotai.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use dotai_core::{Scope, Target};

/// Keep AI tool configuration in sync from one `.ai/` directory
#[derive(Parser, Debug)]
#[command(name = "dotai")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Home directory used for user-scope config and output
    #[arg(long, global = true, value_name = "DIR", env = "DOTAI_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate tool configuration from .ai/ and write it
    Sync {
        /// Target tool (claude, cursor, codex, copilot, all); repeatable
        #[arg(short = 't', long = "target", value_name = "TARGET", value_delimiter = ',')]
        targets: Vec<TargetSelection>,

        /// Show what would be written without writing
        #[arg(long)]
        dry_run: bool,

        /// Config scope (project, user)
        #[arg(short, long, default_value = "project")]
        scope: Scope,

        /// Overwrite files edited since the last sync
        #[arg(long)]
        force: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show generated files against what is on disk
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration and report per-tool limitations
    Check {
        /// Config scope (project, user)
        #[arg(short, long, default_value = "project")]
        scope: Scope,
    },
}

/// One `--target` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSelection {
    All,
    One(Target),
}

impl FromStr for TargetSelection {
    type Err = dotai_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

/// Expand `--target` values; an empty result means every target.
pub fn resolve_targets(selections: &[TargetSelection]) -> Vec<Target> {
    if selections.contains(&TargetSelection::All) {
        return Vec::new();
    }
    selections
        .iter()
        .filter_map(|s| match s {
            TargetSelection::One(target) => Some(*target),
            TargetSelection::All => None,
        })
        .collect()
}
