//! Emitters: per-tool mapping of configuration to output files
//!
//! Every emitter is a pure function of `(config, target)`. The engine runs
//! them through a fixed ordered list, target-major and emitter-minor, which
//! is the order last-writer-wins merges rely on.

mod directives;
mod hooks;
mod mcp;
mod permissions;
mod skills;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ProjectConfig;
use crate::{OutputFile, Target};

pub use directives::DirectivesEmitter;
pub use hooks::HooksEmitter;
pub use mcp::McpEmitter;
pub use permissions::PermissionsEmitter;
pub use skills::SkillsEmitter;

/// Files and lossy-mapping warnings produced by one emitter for one target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitResult {
    pub files: Vec<OutputFile>,
    pub warnings: Vec<String>,
}

impl EmitResult {
    pub fn extend(&mut self, other: EmitResult) {
        self.files.extend(other.files);
        self.warnings.extend(other.warnings);
    }
}

/// Maps configuration entities to one tool's file formats.
pub trait Emitter {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce candidate files for `target`. Must be deterministic.
    fn emit(&self, config: &ProjectConfig, target: Target) -> EmitResult;
}

/// The built-in emitters in their fixed order.
///
/// Permissions precede MCP so that top-level Codex keys land above the
/// `[mcp_servers.*]` tables when `.codex/config.toml` sections are joined.
pub fn builtin_emitters() -> Vec<Box<dyn Emitter>> {
    vec![
        Box::new(SkillsEmitter),
        Box::new(DirectivesEmitter),
        Box::new(PermissionsEmitter),
        Box::new(HooksEmitter),
        Box::new(McpEmitter),
    ]
}

/// Run every emitter for every target, target-major.
pub fn emit_targets(
    emitters: &[Box<dyn Emitter>],
    config: &ProjectConfig,
    targets: &[Target],
) -> Vec<(Target, EmitResult)> {
    targets
        .iter()
        .map(|&target| {
            let mut combined = EmitResult::default();
            for emitter in emitters {
                let result = emitter.emit(config, target);
                tracing::debug!(
                    emitter = emitter.name(),
                    target = %target,
                    files = result.files.len(),
                    "emitted"
                );
                combined.extend(result);
            }
            (target, combined)
        })
        .collect()
}

static NON_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Filename-safe slug of `text`; falls back to `rule`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let slug = NON_SLUG.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "rule".to_string()
    } else {
        slug.to_string()
    }
}

/// Prefix `path` with an optional output directory.
pub(crate) fn prefixed(path: &str, output_dir: Option<&str>) -> String {
    match output_dir {
        Some(dir) => format!("{}/{}", dir.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}
