//! Error types for secret storage.

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::GuessError;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing has been saved at this location yet.
    /// Callers decide the fallback (usually a fresh secret).
    #[error("secret not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Stored content is not a valid secret.
    #[error("stored secret at {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: GuessError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io { path, source }
    }
}
