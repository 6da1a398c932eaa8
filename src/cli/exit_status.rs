use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; for tests, the answer is yes
/// - `Failure` (1): Command completed but the answer is no, or nothing was done
/// - `Error` (2): Command failed (I/O error, invalid config, bad arguments)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed with a negative answer.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl ExitStatus {
    /// `Success` for a true answer, `Failure` for a false one.
    pub fn from_answer(answer: bool) -> Self {
        if answer { Self::Success } else { Self::Failure }
    }
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
