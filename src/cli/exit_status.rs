use std::process::ExitCode;

/// Exit status of a lint run.
///
/// - `Success` (0): no duplicates were found, or there was nothing to check
/// - `Failure` (1): duplicates were found, or the run aborted on a fatal error
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ExitStatus {
    /// No duplicates found, or no catalogs to check.
    #[default]
    Success,
    /// Duplicates found, or a fatal error occurred.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}
