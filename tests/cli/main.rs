use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta::Settings;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod github_actions;

const BIN_NAME: &str = "po-lint";

const CATALOG_HEADER: &str = "msgid \"\"\n\
                              msgstr \"Content-Type: text/plain; charset=UTF-8\\n\"\n\n";


pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a catalog with one empty translation per message id.
    pub fn write_catalog(&self, path: &str, ids: &[&str]) -> Result<()> {
        let mut content = String::from(CATALOG_HEADER);
        for id in ids {
            content.push_str(&format!("msgid \"{}\"\nmsgstr \"\"\n\n", id));
        }
        self.write_file(path, &content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn github_command(&self, summary: &Path) -> Command {
        let mut cmd = self.command();
        cmd.env("GITHUB_ACTIONS", "true");
        cmd.env("GITHUB_STEP_SUMMARY", summary);
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Catalog paths found below `.` may keep the `./` prefix; snapshots drop it.
pub fn path_filters() -> Settings {
    let mut settings = Settings::clone_current();
    settings.add_filter(r"\./(\w+\.po)", "$1");
    settings
}
