use std::path::PathBuf;

use crate::cli::Arguments;

/// Glob pattern, relative to the project root, that selects catalogs to check.
pub const CATALOG_PATTERN: &str = "**/*.po";

/// Which reporter renders the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterKind {
    Console,
    GitHubActions,
}

impl ReporterKind {
    /// Select a reporter from the value of the `GITHUB_ACTIONS` variable.
    ///
    /// Any non-empty value selects the GitHub Actions reporter, including
    /// values such as `"false"`; the runner only ever sets `"true"`.
    pub fn from_github_actions(value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => ReporterKind::GitHubActions,
            _ => ReporterKind::Console,
        }
    }
}

/// Configuration for a single run, built once at process entry.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the catalog pattern is resolved against.
    pub root: PathBuf,
    pub verbose: bool,
    pub reporter: ReporterKind,
    /// Step summary file; `None` writes the summary to stdout.
    pub step_summary: Option<PathBuf>,
}

impl Config {
    pub fn from_arguments(args: Arguments) -> Self {
        let reporter = ReporterKind::from_github_actions(args.github_actions.as_deref());
        let step_summary = args.step_summary.filter(|p| !p.as_os_str().is_empty());

        Self {
            root: args.path,
            verbose: args.verbose,
            reporter,
            step_summary,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            verbose: false,
            reporter: ReporterKind::Console,
            step_summary: None,
        }
    }
}
