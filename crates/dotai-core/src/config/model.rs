//! In-memory configuration model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated configuration loaded from one or more `.ai/` directories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    pub directives: Vec<Directive>,
    pub skills: Vec<Skill>,
    pub servers: Vec<ToolServer>,
    pub permissions: Vec<Permission>,
    /// Free-form tool settings, keyed by setting name
    pub settings: BTreeMap<String, serde_json::Value>,
    pub hooks: Vec<Hook>,
}

impl ProjectConfig {
    /// Layer `overlay` on top of `self`.
    ///
    /// Directives, skills, permissions and hooks append; servers replace by
    /// name and settings by key.
    pub fn merged_with(mut self, overlay: ProjectConfig) -> Self {
        self.directives.extend(overlay.directives);
        self.skills.extend(overlay.skills);
        self.permissions.extend(overlay.permissions);
        self.settings.extend(overlay.settings);
        self.hooks.extend(overlay.hooks);
        for server in overlay.servers {
            match self.servers.iter_mut().find(|s| s.name == server.name) {
                Some(existing) => *existing = server,
                None => self.servers.push(server),
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
            && self.skills.is_empty()
            && self.servers.is_empty()
            && self.permissions.is_empty()
            && self.settings.is_empty()
            && self.hooks.is_empty()
    }
}

/// A persistent instruction shaping agent behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Human-readable description, also the basis of the output slug
    pub description: String,
    /// Markdown body
    pub content: String,
    /// Always included in context (vs. selected by the tool)
    pub always_apply: bool,
    /// Glob patterns restricting where the directive applies
    pub applies_to: Vec<String>,
    /// Subdirectory the directive is emitted under
    pub output_dir: Option<String>,
}

impl Directive {
    /// Applies everywhere, unconditionally.
    pub fn is_global(&self) -> bool {
        self.always_apply && self.applies_to.is_empty()
    }
}

/// A reusable skill package rooted at `skills/<name>/SKILL.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: String,
    pub content: String,
}

/// MCP transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
    Sse,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Http => "http",
            Transport::Sse => "sse",
        }
    }
}

/// An MCP server entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolServer {
    pub name: String,
    pub transport: Transport,
    pub command: Option<String>,
    pub url: Option<String>,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub enabled_tools: Vec<String>,
    pub disabled_tools: Vec<String>,
}

/// Raw shape of a server table in `config.{toml,yaml,yml}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServerSpec {
    #[serde(default)]
    pub transport: Transport,
    pub command: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default, alias = "enabled_tools")]
    pub enabled_tools: Vec<String>,
    #[serde(default, alias = "disabled_tools")]
    pub disabled_tools: Vec<String>,
}

impl ServerSpec {
    pub(crate) fn into_server(self, name: String) -> ToolServer {
        ToolServer {
            name,
            transport: self.transport,
            command: self.command,
            url: self.url,
            args: self.args,
            env: self.env,
            enabled_tools: self.enabled_tools,
            disabled_tools: self.disabled_tools,
        }
    }
}

/// Outcome of a permission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
    Ask,
}

/// An access rule for one tool, optionally narrowed by an argument pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Permission {
    pub tool: String,
    #[serde(default)]
    pub pattern: Option<String>,
    pub decision: Decision,
}

impl Permission {
    /// `Tool(pattern)`, or just `Tool`.
    pub fn rule(&self) -> String {
        match &self.pattern {
            Some(pattern) => format!("{}({})", self.tool, pattern),
            None => self.tool.clone(),
        }
    }
}

/// A command run at a lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hook {
    /// Event name in camelCase, e.g. `preToolUse`
    pub event: String,
    #[serde(default)]
    pub matcher: Option<String>,
    pub handler: String,
}

/// Raw shape of the main config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default, alias = "mcpServers")]
    pub mcp_servers: BTreeMap<String, ServerSpec>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub settings: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub hooks: Vec<Hook>,
}
