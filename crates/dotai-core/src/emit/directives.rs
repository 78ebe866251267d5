//! Directives: the format diverges the most between tools

use super::{EmitResult, Emitter, prefixed, slugify};
use crate::config::{Directive, ProjectConfig};
use crate::{OutputFile, Target};

/// Emits instruction files (`CLAUDE.md`, rules, `AGENTS.md`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectivesEmitter;

impl Emitter for DirectivesEmitter {
    fn name(&self) -> &'static str {
        "directives"
    }

    fn emit(&self, config: &ProjectConfig, target: Target) -> EmitResult {
        let directives = &config.directives;
        match target {
            Target::Claude => emit_claude(directives),
            Target::Cursor => emit_cursor(directives),
            Target::Codex => emit_codex(directives),
            Target::Copilot => emit_copilot(directives),
        }
    }
}

/// Group by output directory, keeping first-seen order.
fn group_by_output_dir<'a>(
    directives: impl IntoIterator<Item = &'a Directive>,
) -> Vec<(Option<&'a str>, Vec<&'a Directive>)> {
    let mut groups: Vec<(Option<&'a str>, Vec<&'a Directive>)> = Vec::new();
    for directive in directives {
        let key = directive.output_dir.as_deref();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(directive),
            None => groups.push((key, vec![directive])),
        }
    }
    groups
}

fn joined_bodies(group: &[&Directive]) -> String {
    let bodies: Vec<&str> = group.iter().map(|d| d.content.as_str()).collect();
    format!("{}\n", bodies.join("\n\n---\n\n"))
}

/// Global directives concatenate into `CLAUDE.md`; the rest become rule files.
fn emit_claude(directives: &[Directive]) -> EmitResult {
    let mut files = Vec::new();

    for (dir, group) in group_by_output_dir(directives.iter().filter(|d| d.is_global())) {
        files.push(OutputFile::new(prefixed("CLAUDE.md", dir), joined_bodies(&group)));
    }

    for directive in directives.iter().filter(|d| !d.is_global()) {
        let path = format!(".claude/rules/{}.md", slugify(&directive.description));
        // Claude rules have no frontmatter, so scope goes in a comment
        let content = if directive.applies_to.is_empty() {
            format!("{}\n", directive.content)
        } else {
            format!(
                "<!-- applies to: {} -->\n\n{}\n",
                directive.applies_to.join(", "),
                directive.content
            )
        };
        files.push(OutputFile::new(
            prefixed(&path, directive.output_dir.as_deref()),
            content,
        ));
    }

    EmitResult {
        files,
        warnings: Vec::new(),
    }
}

/// One `.mdc` rule per directive, with frontmatter.
fn emit_cursor(directives: &[Directive]) -> EmitResult {
    let files = directives
        .iter()
        .map(|directive| {
            let mut frontmatter = Vec::new();
            if !directive.description.is_empty() {
                frontmatter.push(format!("description: {}", directive.description));
            }
            if !directive.applies_to.is_empty() {
                frontmatter.push(format!("globs: {}", directive.applies_to.join(", ")));
            }
            frontmatter.push(format!("alwaysApply: {}", directive.always_apply));

            let path = format!(".cursor/rules/{}.mdc", slugify(&directive.description));
            OutputFile::new(
                prefixed(&path, directive.output_dir.as_deref()),
                format!("---\n{}\n---\n\n{}\n", frontmatter.join("\n"), directive.content),
            )
        })
        .collect();

    EmitResult {
        files,
        warnings: Vec::new(),
    }
}

/// Everything concatenates into `AGENTS.md`; scoping survives only as a note.
fn emit_codex(directives: &[Directive]) -> EmitResult {
    let mut result = EmitResult::default();

    for (dir, group) in group_by_output_dir(directives) {
        let sections: Vec<String> = group
            .iter()
            .map(|d| {
                let header = if d.description.is_empty() {
                    "## Directive".to_string()
                } else {
                    format!("## {}", d.description)
                };
                let note = if d.applies_to.is_empty() {
                    String::new()
                } else {
                    format!("\n\n> Applies to: {}", d.applies_to.join(", "))
                };
                format!("{header}{note}\n\n{}", d.content)
            })
            .collect();

        result.files.push(OutputFile::new(
            prefixed("AGENTS.md", dir),
            format!("# Project Instructions\n\n{}\n", sections.join("\n\n---\n\n")),
        ));
    }

    if directives.iter().any(|d| !d.applies_to.is_empty()) {
        result.warnings.push(
            "Codex AGENTS.md does not support file-scoped directives; appliesTo patterns are included as notes but not enforced."
                .to_string(),
        );
    }

    result
}

/// Repo-wide instructions plus per-directive `.instructions.md` files.
fn emit_copilot(directives: &[Directive]) -> EmitResult {
    let mut files = Vec::new();

    for (dir, group) in group_by_output_dir(directives.iter().filter(|d| d.is_global())) {
        files.push(OutputFile::new(
            prefixed(".github/copilot-instructions.md", dir),
            joined_bodies(&group),
        ));
    }

    for directive in directives.iter().filter(|d| !d.is_global()) {
        let path = format!(
            ".github/instructions/{}.instructions.md",
            slugify(&directive.description)
        );
        let content = if directive.applies_to.is_empty() {
            format!("{}\n", directive.content)
        } else {
            format!(
                "---\napplyTo: \"{}\"\n---\n\n{}\n",
                directive.applies_to.join(","),
                directive.content
            )
        };
        files.push(OutputFile::new(
            prefixed(&path, directive.output_dir.as_deref()),
            content,
        ));
    }

    EmitResult {
        files,
        warnings: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn global(description: &str, content: &str) -> Directive {
        Directive {
            description: description.to_string(),
            content: content.to_string(),
            always_apply: true,
            applies_to: Vec::new(),
            output_dir: None,
        }
    }

    fn scoped(description: &str, glob: &str, content: &str) -> Directive {
        Directive {
            always_apply: false,
            applies_to: vec![glob.to_string()],
            ..global(description, content)
        }
    }

    fn config(directives: Vec<Directive>) -> ProjectConfig {
        ProjectConfig {
            directives,
            ..Default::default()
        }
    }

    #[test]
    fn test_claude_concatenates_globals_and_splits_scoped() {
        let cfg = config(vec![
            global("style", "Use tabs."),
            global("tone", "Be brief."),
            scoped("Rust Code", "**/*.rs", "No unwrap."),
        ]);
        let result = DirectivesEmitter.emit(&cfg, Target::Claude);

        assert_eq!(
            result.files,
            vec![
                OutputFile::new("CLAUDE.md", "Use tabs.\n\n---\n\nBe brief.\n"),
                OutputFile::new(
                    ".claude/rules/rust-code.md",
                    "<!-- applies to: **/*.rs -->\n\nNo unwrap.\n"
                ),
            ]
        );
    }

    #[test]
    fn test_output_dir_prefixes_paths() {
        let mut docs = global("docs", "Docs only.");
        docs.output_dir = Some("docs-site".to_string());
        let cfg = config(vec![global("root", "Root."), docs]);

        let paths: Vec<String> = DirectivesEmitter
            .emit(&cfg, Target::Claude)
            .files
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(paths, vec!["CLAUDE.md", "docs-site/CLAUDE.md"]);
    }

    #[test]
    fn test_cursor_frontmatter() {
        let cfg = config(vec![scoped("Rust", "*.rs", "No unwrap.")]);
        let result = DirectivesEmitter.emit(&cfg, Target::Cursor);
        assert_eq!(
            result.files[0],
            OutputFile::new(
                ".cursor/rules/rust.mdc",
                "---\ndescription: Rust\nglobs: *.rs\nalwaysApply: false\n---\n\nNo unwrap.\n"
            )
        );
    }

    #[test]
    fn test_codex_warns_on_scoped() {
        let cfg = config(vec![global("style", "Tabs."), scoped("Rust", "*.rs", "No unwrap.")]);
        let result = DirectivesEmitter.emit(&cfg, Target::Codex);

        assert_eq!(result.files.len(), 1);
        assert_eq!(
            result.files[0].content,
            "# Project Instructions\n\n## style\n\nTabs.\n\n---\n\n## Rust\n\n> Applies to: *.rs\n\nNo unwrap.\n"
        );
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_codex_without_directives_emits_nothing() {
        let result = DirectivesEmitter.emit(&config(Vec::new()), Target::Codex);
        assert!(result.files.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_copilot_paths() {
        let cfg = config(vec![global("style", "Tabs."), scoped("Rust", "*.rs", "No unwrap.")]);
        let result = DirectivesEmitter.emit(&cfg, Target::Copilot);
        assert_eq!(
            result.files,
            vec![
                OutputFile::new(".github/copilot-instructions.md", "Tabs.\n"),
                OutputFile::new(
                    ".github/instructions/rust.instructions.md",
                    "---\napplyTo: \"*.rs\"\n---\n\nNo unwrap.\n"
                ),
            ]
        );
    }
}
