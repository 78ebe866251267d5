//! Sync orchestration
//!
//! - **sync**: load, validate, emit, merge, diff, gate, confirm, write
//! - **status**: classify every output path without writing
//! - **check**: validate configuration and collect per-target warnings

mod engine;
mod report;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{
    CheckReport, EntityCounts, PlannedWrite, StatusReport, SyncOutcome, SyncReport, TargetSummary,
};
