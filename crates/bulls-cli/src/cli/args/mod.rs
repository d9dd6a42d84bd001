use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod common;
pub use common::*;

#[derive(Parser)]
#[command(
    name = "bulls",
    version,
    about = "Bulls and Cows: guess the 4-digit secret with unique digits"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play interactively on the terminal
    Play(PlayArgs),
    /// Score a guess against a known secret
    Score(ScoreArgs),
    /// Check whether an input is a well-formed guess
    Validate(ValidateArgs),
    /// Generate a secret and save it to the secret file
    NewSecret(NewSecretArgs),
    /// Print the version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct PlayArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Secret file (overrides `secret_file` from the config)
    #[arg(long, env = "BULLS_SECRET_FILE")]
    pub secret_file: Option<PathBuf>,

    /// Save every new secret to the secret file
    #[arg(long)]
    pub persist: bool,

    /// Start the first game with the secret stored in the secret file.
    /// Falls back to a fresh secret if none is stored.
    #[arg(long)]
    pub resume: bool,

    /// Do not print the guess history before each prompt
    #[arg(long)]
    pub no_history: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScoreArgs {
    pub guess: String,

    pub secret: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    pub input: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct NewSecretArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(long, env = "BULLS_SECRET_FILE")]
    pub secret_file: Option<PathBuf>,

    /// Print the generated secret
    #[arg(long)]
    pub show: bool,
}
