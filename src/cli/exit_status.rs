use std::process::ExitCode;

use crate::core::php::EditOutcome;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, the requested state is reached
/// - `Failure` (1): Command completed with a negative answer (class not found, invalid locale)
/// - `Error` (2): Command failed due to internal error (I/O error, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}

impl From<EditOutcome> for ExitStatus {
    fn from(outcome: EditOutcome) -> Self {
        if outcome.is_success() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}
