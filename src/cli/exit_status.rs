use std::process::ExitCode;

/// Exit status of a run, following common conventions for linter tools.
///
/// - `Success` (0): no ERROR findings (warnings may have been reported)
/// - `Failure` (1): at least one ERROR finding
/// - `Error` (2): the run itself failed (unreadable file, bad config, ...)
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
