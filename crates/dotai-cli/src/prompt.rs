//! Terminal confirmation prompt

use colored::{ColoredString, Colorize};
use dialoguer::Confirm;
use dotai_core::{ChangeSet, Confirmation, FileStatus, Prompter};

/// Prints the change table and asks before writing.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, changes: &ChangeSet) -> dotai_core::Result<Confirmation> {
        println!();
        for change in &changes.changes {
            let target = change.target_path.display().to_string();
            let line = format!("  {:<40}{}", target, status_label(change.entry.status));
            println!("{}", paint(change.entry.status, line));
        }
        println!();

        let count = changes.change_count();
        let answer = Confirm::new()
            .with_prompt(format!("Apply {count} change{}?", plural(count)))
            .default(true)
            .interact_opt()
            .map_err(|e| dotai_core::Error::Prompt {
                message: e.to_string(),
            })?;

        // Esc yields None
        Ok(match answer {
            Some(true) => Confirmation::Proceed,
            Some(false) | None => Confirmation::Decline,
        })
    }
}

fn status_label(status: FileStatus) -> String {
    match status {
        FileStatus::UpToDate => format!("{status} (skip)"),
        _ => status.to_string(),
    }
}

/// Color a line by file status.
pub fn paint(status: FileStatus, text: String) -> ColoredString {
    match status {
        FileStatus::New => text.green(),
        FileStatus::Modified => text.yellow(),
        FileStatus::Conflict => text.red(),
        FileStatus::UpToDate | FileStatus::Orphaned => text.dimmed(),
    }
}

pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_to_date_rows_are_marked_skip() {
        assert_eq!(status_label(FileStatus::UpToDate), "up-to-date (skip)");
        assert_eq!(status_label(FileStatus::Conflict), "conflict");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(0), "s");
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
