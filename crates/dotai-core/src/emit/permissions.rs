//! Permissions and settings
//!
//! Claude and Cursor take allow/deny rule lists; Codex only has a single
//! approval policy, so anything finer is lost there.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use super::{EmitResult, Emitter};
use crate::config::{Decision, Permission, ProjectConfig};
use crate::{OutputFile, Target};

/// Emits `.claude/settings.json`, `.cursor/cli.json` or `.codex/config.toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionsEmitter;

impl Emitter for PermissionsEmitter {
    fn name(&self) -> &'static str {
        "permissions"
    }

    fn emit(&self, config: &ProjectConfig, target: Target) -> EmitResult {
        let permissions = &config.permissions;
        let settings = &config.settings;
        if permissions.is_empty() && settings.is_empty() {
            return EmitResult::default();
        }

        match target {
            Target::Claude => json_file(".claude/settings.json", target, permissions, settings),
            Target::Cursor => json_file(".cursor/cli.json", target, permissions, settings),
            Target::Codex => codex_file(permissions, settings),
            Target::Copilot => copilot_warnings(permissions, settings),
        }
    }
}

fn json_file(
    path: &str,
    target: Target,
    permissions: &[Permission],
    settings: &BTreeMap<String, Value>,
) -> EmitResult {
    let mut result = EmitResult::default();
    let mut document = Map::new();

    if !permissions.is_empty() {
        let rules = |decision: Decision| -> Vec<String> {
            permissions
                .iter()
                .filter(|p| p.decision == decision)
                .map(Permission::rule)
                .collect()
        };
        let mut lists = Map::new();
        for (key, decision) in [("allow", Decision::Allow), ("deny", Decision::Deny)] {
            let list = rules(decision);
            if !list.is_empty() {
                lists.insert(key.into(), json!(list));
            }
        }
        document.insert("permissions".into(), Value::Object(lists));

        if permissions.iter().any(|p| p.decision == Decision::Ask) {
            result.warnings.push(format!(
                "{} does not support the \"ask\" permission decision; those rules are omitted.",
                target.label()
            ));
        }
    }

    for (key, value) in settings {
        document.insert(key.clone(), value.clone());
    }

    result.files.push(OutputFile::new(
        path,
        format!("{:#}\n", Value::Object(document)),
    ));
    result
}

fn codex_file(permissions: &[Permission], settings: &BTreeMap<String, Value>) -> EmitResult {
    let mut result = EmitResult::default();
    let mut table = toml::Table::new();

    if !permissions.is_empty() {
        let gated = permissions
            .iter()
            .any(|p| matches!(p.decision, Decision::Allow | Decision::Deny));
        let policy = if gated { "unless-allowed" } else { "on-failure" };
        table.insert("approval_policy".into(), toml::Value::String(policy.into()));
        result.warnings.push(
            "Codex permissions are lossy; per-tool and pattern rules are mapped to a single approval_policy."
                .to_string(),
        );
    }

    for (key, value) in settings {
        match toml::Value::try_from(value) {
            Ok(value) => {
                table.insert(key.clone(), value);
            }
            Err(_) => result.warnings.push(format!(
                "Codex setting {key:?} has no TOML representation and is skipped."
            )),
        }
    }

    if table.is_empty() {
        return result;
    }
    match toml::to_string(&table) {
        Ok(body) => result.files.push(OutputFile::new(
            ".codex/config.toml",
            format!("{}\n", body.trim_end()),
        )),
        Err(e) => result
            .warnings
            .push(format!("Codex settings could not be written as TOML: {e}")),
    }
    result
}

fn copilot_warnings(permissions: &[Permission], settings: &BTreeMap<String, Value>) -> EmitResult {
    let mut result = EmitResult::default();
    if !permissions.is_empty() {
        result.warnings.push(
            "Copilot does not support file-based permission configuration; permissions are skipped."
                .to_string(),
        );
    }
    if !settings.is_empty() {
        result.warnings.push(
            "Copilot does not support file-based settings configuration; settings are skipped."
                .to_string(),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn permission(tool: &str, pattern: Option<&str>, decision: Decision) -> Permission {
        Permission {
            tool: tool.to_string(),
            pattern: pattern.map(str::to_string),
            decision,
        }
    }

    fn config() -> ProjectConfig {
        ProjectConfig {
            permissions: vec![
                permission("Bash", Some("git *"), Decision::Allow),
                permission("Read", None, Decision::Allow),
                permission("Bash", Some("rm *"), Decision::Deny),
                permission("Write", None, Decision::Ask),
            ],
            settings: BTreeMap::from([("model".to_string(), json!("opus"))]),
            ..Default::default()
        }
    }

    #[test]
    fn test_nothing_configured_emits_nothing() {
        for target in Target::ALL {
            assert_eq!(
                PermissionsEmitter.emit(&ProjectConfig::default(), target),
                EmitResult::default()
            );
        }
    }

    #[test]
    fn test_claude_settings_json() {
        let result = PermissionsEmitter.emit(&config(), Target::Claude);
        assert_eq!(result.files[0].path, ".claude/settings.json");

        let value: Value = serde_json::from_str(&result.files[0].content).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "opus",
                "permissions": {
                    "allow": ["Bash(git *)", "Read"],
                    "deny": ["Bash(rm *)"]
                }
            })
        );
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("\"ask\""));
    }

    #[test]
    fn test_cursor_cli_json() {
        let result = PermissionsEmitter.emit(&config(), Target::Cursor);
        assert_eq!(result.files[0].path, ".cursor/cli.json");
        let value: Value = serde_json::from_str(&result.files[0].content).unwrap();
        assert_eq!(value["permissions"]["deny"], json!(["Bash(rm *)"]));
    }

    #[test]
    fn test_codex_maps_to_approval_policy() {
        let result = PermissionsEmitter.emit(&config(), Target::Codex);
        assert_eq!(result.files[0].path, ".codex/config.toml");

        let parsed: toml::Table = result.files[0].content.parse().unwrap();
        assert_eq!(parsed["approval_policy"].as_str(), Some("unless-allowed"));
        assert_eq!(parsed["model"].as_str(), Some("opus"));
        assert!(result.warnings[0].contains("lossy"));
    }

    #[test]
    fn test_codex_ask_only_is_on_failure() {
        let config = ProjectConfig {
            permissions: vec![permission("Write", None, Decision::Ask)],
            ..Default::default()
        };
        let result = PermissionsEmitter.emit(&config, Target::Codex);
        let parsed: toml::Table = result.files[0].content.parse().unwrap();
        assert_eq!(parsed["approval_policy"].as_str(), Some("on-failure"));
    }

    #[test]
    fn test_codex_skips_null_setting() {
        let config = ProjectConfig {
            settings: BTreeMap::from([("unset".to_string(), Value::Null)]),
            ..Default::default()
        };
        let result = PermissionsEmitter.emit(&config, Target::Codex);
        assert!(result.files.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_copilot_only_warns() {
        let result = PermissionsEmitter.emit(&config(), Target::Copilot);
        assert!(result.files.is_empty());
        assert_eq!(result.warnings.len(), 2);
    }
}
