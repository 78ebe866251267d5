//! Structural validation of loaded configuration

use std::path::Path;

use super::model::{ProjectConfig, Transport};
use super::ConfigIssue;

/// Check `config` for entities that cannot be emitted sensibly.
pub fn validate(config: &ProjectConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    for directive in &config.directives {
        let file = format!("directives/{}", directive.description);
        if directive.content.trim().is_empty() {
            issues.push(ConfigIssue::new(&file, "Directive has empty content"));
        }
        if let Some(dir) = &directive.output_dir
            && let Some(reason) = output_dir_problem(dir)
        {
            issues.push(ConfigIssue::new(
                &file,
                format!("outputDir {dir:?} {reason}"),
            ));
        }
    }

    for skill in &config.skills {
        if skill.name.trim().is_empty() {
            issues.push(ConfigIssue::new("skills", "Skill has empty name"));
        }
        if skill.content.trim().is_empty() {
            issues.push(ConfigIssue::new(
                format!("skills/{}", skill.name),
                "Skill has empty content",
            ));
        }
    }

    for server in &config.servers {
        if server.name.trim().is_empty() {
            issues.push(ConfigIssue::new("config", "MCP server has empty name"));
        }
        match server.transport {
            Transport::Stdio if server.command.as_deref().is_none_or(str::is_empty) => {
                issues.push(ConfigIssue::new(
                    "config",
                    format!("MCP server {:?} uses stdio transport but has no command", server.name),
                ));
            }
            Transport::Http | Transport::Sse if server.url.as_deref().is_none_or(str::is_empty) => {
                issues.push(ConfigIssue::new(
                    "config",
                    format!(
                        "MCP server {:?} uses {} transport but has no url",
                        server.name,
                        server.transport.as_str()
                    ),
                ));
            }
            _ => {}
        }
    }

    for permission in &config.permissions {
        if permission.tool.trim().is_empty() {
            issues.push(ConfigIssue::new("config", "Permission has empty tool"));
        }
    }

    for hook in &config.hooks {
        if hook.event.trim().is_empty() || hook.handler.trim().is_empty() {
            issues.push(ConfigIssue::new("config", "Hook requires an event and a handler"));
        }
    }

    issues
}

fn output_dir_problem(dir: &str) -> Option<&'static str> {
    if dir.starts_with('/') || dir.starts_with('\\') || Path::new(dir).is_absolute() {
        Some("must be relative")
    } else if dir.split(['/', '\\']).any(|s| s == "..") {
        Some("must not contain '..'")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Decision, Directive, Hook, Permission, Skill, ToolServer};
    use std::collections::BTreeMap;

    fn directive(content: &str, output_dir: Option<&str>) -> Directive {
        Directive {
            description: "style".to_string(),
            content: content.to_string(),
            always_apply: true,
            applies_to: Vec::new(),
            output_dir: output_dir.map(str::to_string),
        }
    }

    fn server(name: &str, transport: Transport, command: Option<&str>, url: Option<&str>) -> ToolServer {
        ToolServer {
            name: name.to_string(),
            transport,
            command: command.map(str::to_string),
            url: url.map(str::to_string),
            args: Vec::new(),
            env: BTreeMap::new(),
            enabled_tools: Vec::new(),
            disabled_tools: Vec::new(),
        }
    }

    #[test]
    fn test_valid_config_has_no_issues() {
        let config = ProjectConfig {
            directives: vec![directive("Use tabs.", Some("docs-site"))],
            skills: vec![Skill {
                name: "review".into(),
                content: "Review.".into(),
            }],
            servers: vec![
                server("db", Transport::Stdio, Some("db"), None),
                server("web", Transport::Http, None, Some("https://x")),
            ],
            ..Default::default()
        };
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_empty_content_rejected() {
        let config = ProjectConfig {
            directives: vec![directive("  \n", None)],
            skills: vec![Skill {
                name: "s".into(),
                content: String::new(),
            }],
            ..Default::default()
        };
        let issues = validate(&config);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[1].file, "skills/s");
    }

    #[test]
    fn test_server_transport_requirements() {
        let config = ProjectConfig {
            servers: vec![
                server("", Transport::Stdio, Some("x"), None),
                server("a", Transport::Stdio, None, None),
                server("b", Transport::Sse, Some("cmd"), None),
            ],
            ..Default::default()
        };
        let messages: Vec<String> = validate(&config).into_iter().map(|i| i.message).collect();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("empty name"));
        assert!(messages[1].contains("no command"));
        assert!(messages[2].contains("sse transport but has no url"));
    }

    #[test]
    fn test_output_dir_must_stay_inside_project() {
        let config = ProjectConfig {
            directives: vec![
                directive("a", Some("/etc")),
                directive("b", Some("../sibling")),
            ],
            ..Default::default()
        };
        assert_eq!(validate(&config).len(), 2);
    }

    #[test]
    fn test_permission_and_hook_requirements() {
        let config = ProjectConfig {
            permissions: vec![Permission {
                tool: " ".into(),
                pattern: None,
                decision: Decision::Deny,
            }],
            hooks: vec![Hook {
                event: "preToolUse".into(),
                matcher: None,
                handler: String::new(),
            }],
            ..Default::default()
        };
        let messages: Vec<String> = validate(&config).into_iter().map(|i| i.message).collect();
        assert_eq!(
            messages,
            vec![
                "Permission has empty tool".to_string(),
                "Hook requires an event and a handler".to_string()
            ]
        );
    }
}
