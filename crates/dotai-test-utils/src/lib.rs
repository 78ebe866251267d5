//! Shared test utilities for the dotai workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder pairing a project root with an
//!   isolated home directory

pub mod project;

pub use project::TestProject;
