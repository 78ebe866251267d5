//! Lifecycle hooks. Only Claude Code takes them from a file.

use serde_json::{Map, Value, json};

use super::{EmitResult, Emitter};
use crate::config::{Hook, ProjectConfig};
use crate::{OutputFile, Target};

/// Emits the `hooks` section of `.claude/settings.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HooksEmitter;

impl Emitter for HooksEmitter {
    fn name(&self) -> &'static str {
        "hooks"
    }

    fn emit(&self, config: &ProjectConfig, target: Target) -> EmitResult {
        let hooks = &config.hooks;
        if hooks.is_empty() {
            return EmitResult::default();
        }

        match target {
            Target::Claude => claude_file(hooks),
            Target::Cursor => warning("Cursor hook support is limited; hooks are not emitted."),
            Target::Codex => warning("Codex does not support hooks; they are skipped."),
            Target::Copilot => warning("Copilot does not support file-based hooks; they are skipped."),
        }
    }
}

fn warning(message: &str) -> EmitResult {
    EmitResult {
        files: Vec::new(),
        warnings: vec![message.to_string()],
    }
}

/// `preToolUse` -> `PreToolUse`
fn event_name(event: &str) -> String {
    let mut chars = event.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn claude_file(hooks: &[Hook]) -> EmitResult {
    let mut events: Map<String, Value> = Map::new();
    for hook in hooks {
        let mut entry = Map::new();
        if let Some(matcher) = &hook.matcher {
            entry.insert("matcher".into(), json!(matcher));
        }
        entry.insert(
            "hooks".into(),
            json!([{ "type": "command", "command": hook.handler }]),
        );

        if let Value::Array(list) = events
            .entry(event_name(&hook.event))
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            list.push(Value::Object(entry));
        }
    }

    let document = json!({ "hooks": events });
    EmitResult {
        files: vec![OutputFile::new(
            ".claude/settings.json",
            format!("{document:#}\n"),
        )],
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hook(event: &str, matcher: Option<&str>, handler: &str) -> Hook {
        Hook {
            event: event.to_string(),
            matcher: matcher.map(str::to_string),
            handler: handler.to_string(),
        }
    }

    #[test]
    fn test_event_name() {
        assert_eq!(event_name("preToolUse"), "PreToolUse");
        assert_eq!(event_name("SessionStart"), "SessionStart");
        assert_eq!(event_name(""), "");
    }

    #[test]
    fn test_claude_groups_by_event() {
        let config = ProjectConfig {
            hooks: vec![
                hook("preToolUse", Some("Bash"), "./guard.sh"),
                hook("sessionStart", None, "./hello.sh"),
                hook("preToolUse", Some("Write"), "./lint.sh"),
            ],
            ..Default::default()
        };
        let result = HooksEmitter.emit(&config, Target::Claude);
        let value: Value = serde_json::from_str(&result.files[0].content).unwrap();
        assert_eq!(
            value,
            json!({"hooks": {
                "PreToolUse": [
                    {"matcher": "Bash", "hooks": [{"type": "command", "command": "./guard.sh"}]},
                    {"matcher": "Write", "hooks": [{"type": "command", "command": "./lint.sh"}]}
                ],
                "SessionStart": [
                    {"hooks": [{"type": "command", "command": "./hello.sh"}]}
                ]
            }})
        );
    }

    #[test]
    fn test_other_targets_warn() {
        let config = ProjectConfig {
            hooks: vec![hook("preToolUse", None, "./guard.sh")],
            ..Default::default()
        };
        for target in [Target::Cursor, Target::Codex, Target::Copilot] {
            let result = HooksEmitter.emit(&config, target);
            assert!(result.files.is_empty());
            assert_eq!(result.warnings.len(), 1);
        }
    }
}
