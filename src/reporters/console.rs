use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::{NO_DUPLICATES_MESSAGE, NO_FILES_MESSAGE, Reporter};
use crate::cli::ExitStatus;
use crate::core::ScanResult;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2705}"; // ✅

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{274C}"; // ❌

/// Fatal error mark for consistent output formatting.
pub const ERROR_MARK: &str = "\u{2757}"; // ❗

/// Plain-text reporter for local runs.
///
/// Success goes to stdout, failures to stderr. Duplicates are only listed in
/// the final failure report.
pub struct ConsoleReporter {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    status: ExitStatus,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Reporter writing to custom streams. Useful for testing.
    pub fn with_writers(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self {
            out,
            err,
            status: ExitStatus::Success,
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn report_success(&mut self) -> Result<()> {
        let message = NO_DUPLICATES_MESSAGE.green();
        writeln!(self.out, "{} {}", SUCCESS_MARK, message)?;
        Ok(())
    }

    fn report_no_files_found(&mut self) -> Result<()> {
        writeln!(self.out, "{}", NO_FILES_MESSAGE)?;
        Ok(())
    }

    fn report_failure(&mut self, result: &ScanResult) -> Result<()> {
        self.status = ExitStatus::Failure;

        let heading = format!("Found duplicate msgid's in {} file(s)", result.len());
        writeln!(self.err, "{} {}", FAILURE_MARK, heading.bold().red())?;
        for (file, duplicates) in result {
            writeln!(self.err)?;
            writeln!(
                self.err,
                "- {} ({} duplicates)",
                file.cyan(),
                duplicates.len()
            )?;
            for msgid in duplicates {
                writeln!(self.err, "  - \"{}\"", msgid)?;
            }
        }
        Ok(())
    }

    fn report_fatal_error(&mut self, error: &anyhow::Error) -> Result<()> {
        self.status = ExitStatus::Failure;

        writeln!(self.err, "{} {}", ERROR_MARK, "Error".bold().red())?;
        writeln!(self.err, "{:?}", error)?;
        Ok(())
    }

    fn exit_status(&self) -> ExitStatus {
        self.status
    }
}
