//! Markdown files with optional YAML frontmatter

use serde::Deserialize;

/// Frontmatter keys recognized on directive files.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DirectiveMeta {
    pub description: Option<String>,
    pub always_apply: Option<bool>,
    #[serde(default)]
    pub applies_to: Option<OneOrMany>,
    pub output_dir: Option<String>,
}

/// A YAML value written either as a single string or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// Split `raw` into its frontmatter block (if any) and trimmed body.
///
/// Frontmatter is delimited by `---` lines at the very start of the file.
/// An unterminated block is treated as plain body.
pub(crate) fn split(raw: &str) -> (Option<&str>, &str) {
    let trimmed = raw.trim_start();
    let Some(rest) = trimmed.strip_prefix("---") else {
        return (None, raw.trim());
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return (None, raw.trim());
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(block), body.trim());
        }
        offset += line.len();
    }
    (None, raw.trim())
}

/// Parse directive frontmatter; an empty block yields defaults.
pub(crate) fn parse_directive_meta(block: &str) -> Result<DirectiveMeta, serde_yaml::Error> {
    if block.trim().is_empty() {
        return Ok(DirectiveMeta::default());
    }
    serde_yaml::from_str(block)
}
