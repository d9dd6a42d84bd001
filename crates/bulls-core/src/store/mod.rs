//! Durable storage for a single secret.

mod error;
mod file;

pub use error::{StoreError, StoreResult};
pub use file::{FileSecretStore, DEFAULT_SECRET_FILE};

use crate::secret::{generate_secret, Secret};

/// Saves and loads one secret under a fixed key.
///
/// `load` must report a missing secret as [`StoreError::NotFound`], never
/// as a default value.
pub trait SecretStore {
    fn save(&self, secret: &Secret) -> StoreResult<()>;
    fn load(&self) -> StoreResult<Secret>;
}

/// Generates a fresh secret and saves it before returning it.
pub fn generate_and_save_secret<S: SecretStore + ?Sized>(store: &S) -> StoreResult<Secret> {
    let secret = generate_secret();
    store.save(&secret)?;
    Ok(secret)
}
