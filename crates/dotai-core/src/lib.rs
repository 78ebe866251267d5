//! Synchronization engine for dotai
//!
//! Projects one `.ai/` configuration directory into per-tool output trees
//! and keeps them in sync:
//!
//! - **Merge resolver** ([`merge`]): one file per logical path, strategy by extension
//! - **State store** ([`state`]): fingerprints of the last successful write
//! - **Diff classifier** ([`diff`]): three-way comparison of generated, on-disk
//!   and last-written content
//! - **Path resolver** ([`paths`]): project or user-scope placement
//! - **Ignore synchronizer** ([`ignore`]): managed `.gitignore` block
//! - **SyncEngine** ([`sync`]): the end-to-end operation
//!
//! Configuration loading ([`config`]), per-tool emitters ([`emit`]) and
//! confirmation ([`prompt`]) sit behind narrow traits.
//!
//! # Example
//!
//! ```no_run
//! use dotai_core::{AssumeYes, SyncEngine, SyncOptions};
//!
//! fn example() -> dotai_core::Result<()> {
//!     let engine = SyncEngine::new(".", dotai_core::paths::default_home()?);
//!     let report = engine.sync(&SyncOptions::default(), &mut AssumeYes)?;
//!     println!("wrote {} files", report.written.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod diff;
pub mod emit;
pub mod error;
pub mod ignore;
pub mod merge;
pub mod output;
pub mod paths;
pub mod prompt;
pub mod state;
pub mod sync;
pub mod target;

pub use config::{ConfigIssue, ConfigLoader, DirectoryLoader, LoadResult, ProjectConfig};
pub use diff::{FileStatus, FileStatusEntry, StatusCounts};
pub use emit::{EmitResult, Emitter};
pub use error::{Error, Result};
pub use output::OutputFile;
pub use paths::PathResolver;
pub use prompt::{AssumeYes, ChangeSet, Confirmation, PlannedChange, Prompter};
pub use state::SyncState;
pub use sync::{
    CheckReport, EntityCounts, PlannedWrite, StatusReport, SyncEngine, SyncOptions, SyncOutcome,
    SyncReport, TargetSummary,
};
pub use target::{Scope, Target};
