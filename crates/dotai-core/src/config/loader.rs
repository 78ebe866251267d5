//! Loading configuration from `.ai/` directories

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dotai_fs::constants::CONFIG_FILE_NAMES;
use dotai_fs::{ConfigStore, DotaiPath, NormalizedPath, io};

use super::frontmatter;
use super::model::{ConfigFile, Directive, ProjectConfig, Skill};
use super::ConfigIssue;
use crate::Scope;

/// Result of loading configuration: whatever could be read, plus issues.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub config: ProjectConfig,
    pub issues: Vec<ConfigIssue>,
}

/// Supplies configuration for a scope.
pub trait ConfigLoader {
    fn load(&self, scope: Scope) -> LoadResult;
}

/// Reads `~/.ai/` and `<project>/.ai/` from disk.
///
/// Project scope layers the project directory over the user directory;
/// user scope reads only the user directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    project_root: PathBuf,
    home: PathBuf,
}

impl DirectoryLoader {
    pub fn new(project_root: impl Into<PathBuf>, home: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            home: home.into(),
        }
    }

    /// Load a single `.ai/` directory. A missing directory is empty config.
    pub fn load_dir(dir: &Path) -> LoadResult {
        let mut result = LoadResult::default();
        tracing::debug!(dir = %dir.display(), "loading config directory");

        load_config_file(dir, &mut result);
        load_directives(&dir.join(DotaiPath::DirectivesDir.as_str()), &mut result);
        load_skills(&dir.join(DotaiPath::SkillsDir.as_str()), &mut result);

        result
    }
}

impl ConfigLoader for DirectoryLoader {
    fn load(&self, scope: Scope) -> LoadResult {
        let user = Self::load_dir(&self.home.join(DotaiPath::ConfigDir.as_str()));
        match scope {
            Scope::User => user,
            Scope::Project => {
                let project = Self::load_dir(&self.project_root.join(DotaiPath::ConfigDir.as_str()));
                let mut issues = user.issues;
                issues.extend(project.issues);
                LoadResult {
                    config: user.config.merged_with(project.config),
                    issues,
                }
            }
        }
    }
}

fn load_config_file(dir: &Path, result: &mut LoadResult) {
    let Some(path) = CONFIG_FILE_NAMES
        .iter()
        .map(|name| NormalizedPath::new(dir.join(name)))
        .find(NormalizedPath::is_file)
    else {
        return;
    };

    match ConfigStore::new().load::<Option<ConfigFile>>(&path) {
        Ok(parsed) => {
            let parsed = parsed.unwrap_or_default();
            result.config.servers.extend(
                parsed
                    .mcp_servers
                    .into_iter()
                    .map(|(name, spec)| spec.into_server(name)),
            );
            result.config.permissions.extend(parsed.permissions);
            result.config.settings.extend(parsed.settings);
            result.config.hooks.extend(parsed.hooks);
        }
        Err(e) => result.issues.push(ConfigIssue::new(path.as_str(), e.to_string())),
    }
}

/// Sorted entries of `dir`; a missing directory has none.
fn sorted_entries(dir: &Path, result: &mut LoadResult) -> Vec<PathBuf> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            result
                .issues
                .push(ConfigIssue::new(dir.display().to_string(), e.to_string()));
            return Vec::new();
        }
    };

    let mut entries: Vec<PathBuf> = read.filter_map(|e| e.ok().map(|e| e.path())).collect();
    entries.sort();
    entries
}

fn load_directives(dir: &Path, result: &mut LoadResult) {
    for path in sorted_entries(dir, result) {
        if path.extension().and_then(|e| e.to_str()) != Some("md") || !path.is_file() {
            continue;
        }
        let file = NormalizedPath::new(&path);
        match read_directive(&file) {
            Ok(directive) => result.config.directives.push(directive),
            Err(message) => result.issues.push(ConfigIssue::new(file.as_str(), message)),
        }
    }
}

fn read_directive(file: &NormalizedPath) -> Result<Directive, String> {
    let raw = io::read_text(file).map_err(|e| e.to_string())?;
    let (block, body) = frontmatter::split(&raw);
    let meta = match block {
        Some(block) => frontmatter::parse_directive_meta(block)
            .map_err(|e| format!("Invalid frontmatter: {e}"))?,
        None => Default::default(),
    };

    let stem = file
        .file_name()
        .and_then(|name| name.strip_suffix(".md"))
        .unwrap_or_default();

    Ok(Directive {
        description: meta.description.unwrap_or_else(|| stem.to_string()),
        content: body.to_string(),
        always_apply: meta.always_apply.unwrap_or(true),
        applies_to: meta.applies_to.map(|a| a.into_vec()).unwrap_or_default(),
        output_dir: meta.output_dir.filter(|d| !d.is_empty()),
    })
}

fn load_skills(dir: &Path, result: &mut LoadResult) {
    for path in sorted_entries(dir, result) {
        if !path.is_dir() {
            continue;
        }
        let skill_file = NormalizedPath::new(path.join("SKILL.md"));
        let content = match io::read_text_if_exists(&skill_file) {
            Ok(Some(content)) => content,
            Ok(None) => continue,
            Err(e) => {
                result
                    .issues
                    .push(ConfigIssue::new(skill_file.as_str(), e.to_string()));
                continue;
            }
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        result.config.skills.push(Skill { name, content });
    }
}
