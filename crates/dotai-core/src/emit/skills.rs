//! Skills: copied verbatim into each tool's skills directory

use super::{EmitResult, Emitter};
use crate::config::ProjectConfig;
use crate::{OutputFile, Target};

/// Emits `<skills dir>/<name>/SKILL.md` per skill.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillsEmitter;

fn skills_dir(target: Target) -> &'static str {
    match target {
        Target::Claude => ".claude/skills",
        Target::Cursor => ".cursor/skills",
        Target::Codex => ".codex/skills",
        Target::Copilot => ".github/skills",
    }
}

impl Emitter for SkillsEmitter {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn emit(&self, config: &ProjectConfig, target: Target) -> EmitResult {
        let base = skills_dir(target);
        EmitResult {
            files: config
                .skills
                .iter()
                .map(|skill| {
                    OutputFile::new(format!("{base}/{}/SKILL.md", skill.name), &skill.content)
                })
                .collect(),
            warnings: Vec::new(),
        }
    }
}
