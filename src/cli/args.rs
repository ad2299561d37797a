//! CLI argument definitions using clap.
//!
//! po-lint has a single mode of operation: scan the project root for `.po`
//! catalogs and report duplicate `msgid`s. The GitHub Actions environment
//! variables are read here, once, through clap's `env` support.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to search for .po files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set by the GitHub Actions runner; any non-empty value enables the job summary output
    #[arg(long, env = "GITHUB_ACTIONS", hide = true)]
    pub github_actions: Option<String>,

    /// Step summary file provided by the GitHub Actions runner
    #[arg(long, env = "GITHUB_STEP_SUMMARY", hide = true)]
    pub step_summary: Option<PathBuf>,
}
