//! Scan outcome reporting.
//!
//! A run talks to exactly one [`Reporter`], chosen at startup from the
//! [`Config`]. Both implementations share the same five announcements and
//! differ only in how they render them and how they flag a failed run.
//!
//! ## Module Structure
//!
//! - `console`: Plain stdout/stderr output
//! - `github_actions`: Step summary and workflow command output
//! - `summary`: Step summary document builder and HTML escaping
//! - `workflow`: GitHub Actions workflow commands

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::cli::ExitStatus;
use crate::config::{Config, ReporterKind};
use crate::core::ScanResult;

pub mod console;
pub mod github_actions;
pub mod summary;
pub mod workflow;


pub use console::ConsoleReporter;
pub use github_actions::GitHubActionsReporter;

/// Message printed when no duplicates are found.
pub const NO_DUPLICATES_MESSAGE: &str = "No duplicate msgids found.";

/// Message printed when discovery matches nothing.
pub const NO_FILES_MESSAGE: &str = "No .po files found.";

/// Announcements made over the course of one run.
///
/// Every method returns an error only when output could not be written.
#[enum_dispatch]
pub trait Reporter {
    /// No catalog contains duplicates.
    fn report_success(&mut self) -> Result<()>;

    /// Discovery matched no catalogs. Not a failure.
    fn report_no_files_found(&mut self) -> Result<()>;

    /// At least one catalog contains duplicates. Marks the run failed.
    fn report_failure(&mut self, result: &ScanResult) -> Result<()>;

    /// The run aborted. Marks the run failed.
    fn report_fatal_error(&mut self, error: &anyhow::Error) -> Result<()>;

    /// A single duplicate, announced as soon as its catalog has been scanned.
    fn report_duplicate(&mut self, _file: &str, _msgid: &str) -> Result<()> {
        Ok(())
    }

    /// Exit status the process should end with.
    fn exit_status(&self) -> ExitStatus;
}

/// The reporter selected for this process.
#[enum_dispatch(Reporter)]
pub enum AnyReporter {
    Console(ConsoleReporter),
    GitHubActions(GitHubActionsReporter),
}

impl AnyReporter {
    pub fn from_config(config: &Config) -> Self {
        match config.reporter {
            ReporterKind::Console => ConsoleReporter::new().into(),
            ReporterKind::GitHubActions => {
                GitHubActionsReporter::new(config.step_summary.clone()).into()
            }
        }
    }
}
