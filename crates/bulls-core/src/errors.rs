use std::path::PathBuf;

use thiserror::Error;

use crate::game::GameStatus;

/// Why a string was rejected as a guess (or secret).
///
/// The `Display` text is the user-facing reason; checks run in declaration
/// order and stop at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("must contain only digits")]
    NonDigit,

    #[error("must be exactly 4 digits long")]
    WrongLength { len: usize },

    #[error("all digits must be unique")]
    RepeatedDigit { digit: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over ({status})")]
    Finished { status: GameStatus },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
