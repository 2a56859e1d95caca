use std::path::PathBuf;

use stats::StatsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or insufficient input. Always recoverable by the caller.
    #[error("{0}")]
    Validation(String),

    /// Mathematically undefined request, such as a quantile outside (0, 1).
    #[error("{0}")]
    Domain(String),

    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid batch file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

impl From<StatsError> for Error {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::InsufficientData { .. } => Error::Validation(err.to_string()),
            StatsError::ProbabilityOutOfRange(_) | StatsError::InvalidDegreesOfFreedom(_) => {
                Error::Domain(err.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
