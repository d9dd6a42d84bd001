use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ConfigError;
use crate::store::DEFAULT_SECRET_FILE;

pub const DEFAULT_CONFIG_FILE: &str = "bulls.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Where the secret store reads and writes.
    pub secret_file: PathBuf,
    /// Save every new secret to `secret_file`.
    pub persist_secret: bool,
    /// Print the guess history before each prompt.
    pub show_history: bool,
    /// Input that abandons the current game (case-insensitive).
    pub quit_word: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            secret_file: PathBuf::from(DEFAULT_SECRET_FILE),
            persist_secret: false,
            show_history: true,
            quit_word: "quit".to_string(),
        }
    }
}

impl GameConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        let quit_word = self.quit_word.trim().to_lowercase();
        if quit_word.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "quit_word must not be empty".to_string(),
            });
        }
        if crate::guess::parse_code(&quit_word).is_ok() {
            return Err(ConfigError::Invalid {
                reason: format!("quit_word `{quit_word}` is itself a valid guess"),
            });
        }
        Ok(Self { quit_word, ..self })
    }
}

/// Loads a YAML config file.
///
/// With `required == false` a missing file yields the defaults; otherwise it
/// is a [`ConfigError::NotFound`].
pub fn load_config(path: &Path, required: bool) -> Result<GameConfig, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_config(&raw).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

pub fn parse_config(raw: &str) -> Result<GameConfig, ConfigError> {
    // serde_yaml reads an empty document as null, not as an empty mapping
    if raw.trim().is_empty() {
        return Ok(GameConfig::default());
    }
    let cfg: GameConfig = serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: PathBuf::new(),
        source,
    })?;
    cfg.validate()
}
