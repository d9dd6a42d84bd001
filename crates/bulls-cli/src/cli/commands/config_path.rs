//! Config resolution shared by commands that touch the secret file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bulls_core::config::DEFAULT_CONFIG_FILE;
use bulls_core::{load_config, FileSecretStore, GameConfig};

use crate::cli::args::ConfigArgs;

/// An explicit `--config` must exist; the default file is optional.
pub fn resolve_config(args: &ConfigArgs) -> anyhow::Result<GameConfig> {
    let (path, required) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    load_config(&path, required).with_context(|| format!("loading {}", path.display()))
}

/// `--secret-file` wins over the config value.
pub fn secret_store(cfg: &GameConfig, override_path: Option<&Path>) -> FileSecretStore {
    FileSecretStore::new(override_path.unwrap_or(cfg.secret_file.as_path()))
}
