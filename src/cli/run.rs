use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::core::{discover_catalogs, scan_catalogs};
use crate::reporters::Reporter;

/// Discover, scan and report.
///
/// Returns `Err` when discovery, loading or reporting fails. The caller routes
/// that error to [`Reporter::report_fatal_error`]; nothing else is reported for
/// the run in that case.
pub fn run<R: Reporter>(config: &Config, reporter: &mut R) -> Result<()> {
    let files = discover_catalogs(&config.root)?;

    if files.is_empty() {
        return reporter.report_no_files_found();
    }

    if config.verbose {
        eprintln!(
            "{} {} .po {}",
            "Found".dimmed(),
            files.len(),
            if files.len() == 1 { "file" } else { "files" }
        );
    }

    let result = scan_catalogs(&config.root, &files, config.verbose, reporter)?;

    if result.is_empty() {
        reporter.report_success()
    } else {
        reporter.report_failure(&result)
    }
}
