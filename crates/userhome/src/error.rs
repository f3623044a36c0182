use std::path::PathBuf;

use userhome_platform::Fact;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not determine {0}")]
    NotDetermined(Fact),

    #[error("cannot expand another user's home directory: '{}'", .0.display())]
    UnsupportedUserExpansion(PathBuf),

    #[error("probe failed: {source}")]
    ProbeFailed { source: userhome_platform::Error },
}

impl From<userhome_platform::Error> for Error {
    fn from(e: userhome_platform::Error) -> Self {
        Self::ProbeFailed { source: e }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
