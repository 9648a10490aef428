//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use vitium_core::model::{BankError, SettingsError};

/// Errors emitted while building a `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error("failed to read question bank {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
