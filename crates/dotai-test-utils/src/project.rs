//! [`TestProject`] builder for sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory plus a separate temporary home directory.
///
/// The home directory stands in for `~` so user-scope tests never touch the
/// real one.
///
/// # Example
///
/// ```rust,no_run
/// use dotai_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_directive("style", "Use tabs.");
/// project.assert_file_exists(".ai/directives/style.md");
/// ```
pub struct TestProject {
    root: TempDir,
    home: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create empty project and home directories.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    /// Return the project root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Return the stand-in home directory.
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Absolute path of `rel` under the project root.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel` under the project root, creating parents.
    pub fn write_file(&self, rel: &str, content: &str) {
        write_under(self.root(), rel, content);
    }

    /// Write `content` to `rel` under the home directory, creating parents.
    pub fn write_home_file(&self, rel: &str, content: &str) {
        write_under(self.home(), rel, content);
    }

    /// Write `.ai/config.toml` in the project.
    pub fn write_config(&self, toml: &str) {
        self.write_file(".ai/config.toml", toml);
    }

    /// Write an always-apply directive `.ai/directives/<name>.md`.
    pub fn write_directive(&self, name: &str, body: &str) {
        self.write_file(&format!(".ai/directives/{name}.md"), &format!("{body}\n"));
    }

    /// Write a directive scoped to `glob` (frontmatter `alwaysApply: false`).
    pub fn write_scoped_directive(&self, name: &str, glob: &str, body: &str) {
        let content = format!(
            "---\ndescription: {name} rules\nalwaysApply: false\nappliesTo: \"{glob}\"\n---\n{body}\n"
        );
        self.write_file(&format!(".ai/directives/{name}.md"), &content);
    }

    /// Write a skill `.ai/skills/<name>/SKILL.md`.
    pub fn write_skill(&self, name: &str, body: &str) {
        self.write_file(&format!(".ai/skills/{name}/SKILL.md"), &format!("{body}\n"));
    }

    /// Write an always-apply directive into the user's `~/.ai`.
    pub fn write_user_directive(&self, name: &str, body: &str) {
        self.write_home_file(&format!(".ai/directives/{name}.md"), &format!("{body}\n"));
    }

    /// Read a project file, panicking with the path on failure.
    pub fn read_file(&self, rel: &str) -> String {
        let full_path = self.path(rel);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Could not read file {}: {e}", full_path.display()))
    }

    /// Assert that `rel` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` (relative to the project root) does **not** exist.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the project file at `rel` contains `content`.
    pub fn assert_file_contains(&self, rel: &str, content: &str) {
        let file_content = self.read_file(rel);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            rel,
            content,
            file_content
        );
    }
}

fn write_under(base: &Path, rel: &str, content: &str) {
    let full_path = base.join(rel);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Could not create {}: {e}", parent.display()));
    }
    fs::write(&full_path, content)
        .unwrap_or_else(|e| panic!("Could not write {}: {e}", full_path.display()));
}
