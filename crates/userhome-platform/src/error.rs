use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("command not found: {cmd}")]
    CommandNotFound { cmd: String },

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command exited with {status}: {cmd}")]
    CommandExited { cmd: String, status: ExitStatus },
}

impl Error {
    /// Whether the error only means the utility is not installed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. })
    }
}
