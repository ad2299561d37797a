use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};

use super::{
    NO_DUPLICATES_MESSAGE, NO_FILES_MESSAGE, Reporter,
    summary::{HEADING_LEVEL_2, Summary, escape_html},
    workflow::WorkflowCommand,
};
use crate::cli::ExitStatus;
use crate::core::{DuplicateSet, ScanResult};

const FAILED_MESSAGE: &str = "Duplicate msgids found in one or more .po files.";

/// Reporter for GitHub Actions jobs.
///
/// Writes a rich step summary, inline error annotations for each duplicate and
/// marks the job failed through a workflow command rather than exiting.
pub struct GitHubActionsReporter {
    out: Box<dyn Write>,
    summary: Summary,
    /// `GITHUB_STEP_SUMMARY`; the summary goes to `out` when unset.
    summary_path: Option<PathBuf>,
    status: ExitStatus,
}

impl GitHubActionsReporter {
    pub fn new(summary_path: Option<PathBuf>) -> Self {
        Self::with_writer(Box::new(io::stdout()), summary_path)
    }

    /// Reporter writing workflow commands to a custom stream. Useful for testing.
    pub fn with_writer(out: Box<dyn Write>, summary_path: Option<PathBuf>) -> Self {
        Self {
            out,
            summary: Summary::new(),
            summary_path,
            status: ExitStatus::Success,
        }
    }

    fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Flag the job as failed. The runner picks up the error annotation and
    /// the process exit status.
    fn set_failed(&mut self, message: &str) -> Result<()> {
        self.status = ExitStatus::Failure;
        writeln!(self.out, "{}", WorkflowCommand::error(message))?;
        Ok(())
    }

    /// Append the buffered summary to the step summary file.
    fn write_summary(&mut self) -> Result<()> {
        let document = self.summary.take();

        match &self.summary_path {
            Some(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open step summary: {:?}", path))?;
                file.write_all(document.as_bytes())
                    .with_context(|| format!("Failed to write step summary: {:?}", path))?;
            }
            None => self.out.write_all(document.as_bytes())?,
        }
        Ok(())
    }
}

fn duplicate_list(duplicates: &DuplicateSet) -> String {
    let mut list = String::from("<ul>");
    for msgid in duplicates {
        let code = escape_html(msgid);
        list.push_str(&format!("<li><pre><code>{}</code></pre></li>", code));
    }
    list.push_str("</ul>");
    list
}

impl Reporter for GitHubActionsReporter {
    fn report_success(&mut self) -> Result<()> {
        self.summary
            .add_heading("✅ No Duplicate `msgid`s Found", 1)
            .add_raw(
                "All `.po` files were checked and no duplicate `msgid`s were found.",
                true,
            );
        self.write_summary()?;
        self.info(NO_DUPLICATES_MESSAGE)
    }

    fn report_no_files_found(&mut self) -> Result<()> {
        self.info(NO_FILES_MESSAGE)?;
        self.summary.add_heading("No `.po` files found", 1);
        self.write_summary()
    }

    fn report_failure(&mut self, result: &ScanResult) -> Result<()> {
        self.summary
            .add_heading(
                &format!("❌ Found duplicate msgid's in {} file(s)", result.len()),
                HEADING_LEVEL_2,
            )
            .add_raw(
                "The following files contain duplicate `msgid` entries. \
                 This can cause issues with translations. Please resolve them.",
                false,
            )
            .add_separator();

        for (file, duplicates) in result {
            let label = format!("`{}` ({} duplicates)", escape_html(file), duplicates.len());
            self.summary.add_details(&label, &duplicate_list(duplicates));
        }

        self.write_summary()?;
        self.set_failed(FAILED_MESSAGE)
    }

    fn report_fatal_error(&mut self, error: &anyhow::Error) -> Result<()> {
        self.set_failed(&format!("{:#}", error))?;
        self.summary
            .add_heading("❗ Error", 1)
            .add_raw(
                "An unexpected error occurred while checking for duplicate `msgid`s.",
                true,
            )
            .add_code_block(&escape_html(&format!("{:?}", error)), "text");
        self.write_summary()
    }

    fn report_duplicate(&mut self, file: &str, msgid: &str) -> Result<()> {
        let message = format!("Duplicate msgid found in {}: \"{}\"", file, msgid);
        writeln!(self.out, "{}", WorkflowCommand::error(&message).file(file))?;
        Ok(())
    }

    fn exit_status(&self) -> ExitStatus {
        self.status
    }
}
