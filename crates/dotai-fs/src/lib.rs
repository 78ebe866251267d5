//! Filesystem primitives for dotai
//!
//! Provides slash-normalized paths, content fingerprints, locked atomic
//! writes and format-agnostic config loading.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::content_fingerprint;
pub use config::ConfigStore;
pub use constants::DotaiPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
