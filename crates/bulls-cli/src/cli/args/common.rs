//! Shared argument types used across multiple commands.

use std::path::PathBuf;

use clap::ValueEnum;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file. Without this flag `bulls.yaml` is read if present.
    #[arg(long, env = "BULLS_CONFIG")]
    pub config: Option<PathBuf>,
}
