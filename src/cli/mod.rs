use anyhow::{Context, Result};

use crate::config::Config;
use crate::reporters::{AnyReporter, Reporter};

mod args;
mod exit_status;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::run;

/// Build the configuration, select the reporter and lint the project.
///
/// Fatal errors raised while linting are handed to the reporter. Only errors
/// that happen before a reporter exists, or while reporting a fatal error,
/// are returned to the caller.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = Config::from_arguments(args);
    let mut reporter = AnyReporter::from_config(&config);

    if let Err(err) = run(&config, &mut reporter) {
        reporter
            .report_fatal_error(&err)
            .with_context(|| format!("Failed to report error: {:#}", err))?;
    }

    Ok(reporter.exit_status())
}
