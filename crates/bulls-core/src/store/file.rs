use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{SecretStore, StoreError, StoreResult};
use crate::secret::Secret;

pub const DEFAULT_SECRET_FILE: &str = "data/secret_number.txt";

/// Stores the secret as a raw 4-character file, no trailing newline.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    path: PathBuf,
}

impl FileSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSecretStore {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_FILE)
    }
}

impl SecretStore for FileSecretStore {
    fn save(&self, secret: &Secret) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(&self.path, secret.to_string()).map_err(|e| StoreError::io(&self.path, e))?;
        info!(path = %self.path.display(), "secret saved");
        Ok(())
    }

    fn load(&self) -> StoreResult<Secret> {
        let raw = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let secret = Secret::parse(raw.trim()).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "secret loaded");
        Ok(secret)
    }
}
