//! MCP server configuration files

use serde_json::{Map, Value, json};

use super::{EmitResult, Emitter};
use crate::config::{ProjectConfig, ToolServer, Transport};
use crate::{OutputFile, Target};

/// Emits `.mcp.json`, `.cursor/mcp.json`, `.codex/config.toml` or
/// `.vscode/mcp.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct McpEmitter;

impl Emitter for McpEmitter {
    fn name(&self) -> &'static str {
        "mcp"
    }

    fn emit(&self, config: &ProjectConfig, target: Target) -> EmitResult {
        let servers = &config.servers;
        if servers.is_empty() {
            return EmitResult::default();
        }

        match target {
            Target::Claude => json_file(".mcp.json", servers, false),
            Target::Cursor => json_file(".cursor/mcp.json", servers, false),
            Target::Codex => codex_file(servers),
            Target::Copilot => {
                let mut result = json_file(".vscode/mcp.json", servers, true);
                result.warnings.push(
                    "Copilot coding agent MCP must be configured in GitHub repo settings separately; .vscode/mcp.json is for VS Code Copilot Chat only."
                        .to_string(),
                );
                result
            }
        }
    }
}

fn json_entry(server: &ToolServer, explicit_type: bool) -> Value {
    let mut entry = Map::new();
    match server.transport {
        Transport::Stdio => {
            if let Some(command) = &server.command {
                entry.insert("command".into(), json!(command));
            }
            if !server.args.is_empty() {
                entry.insert("args".into(), json!(server.args));
            }
            if explicit_type {
                entry.insert("type".into(), json!("stdio"));
            }
        }
        Transport::Http | Transport::Sse => {
            entry.insert("type".into(), json!(server.transport.as_str()));
            if let Some(url) = &server.url {
                entry.insert("url".into(), json!(url));
            }
        }
    }
    if !server.env.is_empty() {
        entry.insert("env".into(), json!(server.env));
    }
    Value::Object(entry)
}

fn json_file(path: &str, servers: &[ToolServer], explicit_type: bool) -> EmitResult {
    let entries: Map<String, Value> = servers
        .iter()
        .map(|s| (s.name.clone(), json_entry(s, explicit_type)))
        .collect();
    let document = json!({ "mcpServers": entries });

    EmitResult {
        files: vec![OutputFile::new(path, format!("{document:#}\n"))],
        warnings: Vec::new(),
    }
}

fn toml_entry(server: &ToolServer) -> toml::Value {
    let mut entry = toml::Table::new();
    entry.insert("type".into(), server.transport.as_str().into());
    match server.transport {
        Transport::Stdio => {
            if let Some(command) = &server.command {
                entry.insert("command".into(), command.as_str().into());
            }
            if !server.args.is_empty() {
                entry.insert("args".into(), server.args.clone().into());
            }
        }
        Transport::Http | Transport::Sse => {
            if let Some(url) = &server.url {
                entry.insert("url".into(), url.as_str().into());
            }
        }
    }
    if !server.env.is_empty() {
        let env: toml::Table = server
            .env
            .iter()
            .map(|(name, value)| (name.clone(), toml::Value::from(value.as_str())))
            .collect();
        entry.insert("env".into(), toml::Value::Table(env));
    }
    toml::Value::Table(entry)
}

fn codex_file(servers: &[ToolServer]) -> EmitResult {
    let mut result = EmitResult::default();
    let entries: toml::Table = servers
        .iter()
        .map(|s| (s.name.clone(), toml_entry(s)))
        .collect();
    let mut document = toml::Table::new();
    document.insert("mcp_servers".into(), toml::Value::Table(entries));

    match toml::to_string(&document) {
        Ok(body) => result.files.push(OutputFile::new(
            ".codex/config.toml",
            format!("{}\n", body.trim()),
        )),
        Err(e) => result
            .warnings
            .push(format!("Codex MCP servers could not be written as TOML: {e}")),
    }

    if servers
        .iter()
        .any(|s| !s.enabled_tools.is_empty() || !s.disabled_tools.is_empty())
    {
        result.warnings.push(
            "Codex config.toml does not support enabledTools/disabledTools filtering for MCP servers."
                .to_string(),
        );
    }

    result
}
