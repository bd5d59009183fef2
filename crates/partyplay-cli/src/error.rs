//! CLI error types.

use std::process::ExitCode;

use partyplay_core::error::DomainError;
use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid arguments.
    #[error("usage error: {0}")]
    Usage(String),

    /// A domain failure, including an unavailable catalog.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Terminal I/O failed.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// Interrupted before the session was ready.
    #[error("interrupted")]
    Interrupted,
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Usage(_) => ExitCode::from(2),
            Self::Domain(e) if e.is_catalog_failure() => ExitCode::from(3),
            Self::Domain(_) | Self::Io(_) => ExitCode::FAILURE,
            Self::Interrupted => ExitCode::from(130),
        }
    }
}
