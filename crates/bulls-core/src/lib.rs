//! Bulls and Cows game engine.
//!
//! The engine is pure: secrets are generated, guesses validated and scored,
//! and game/session state lives in values owned by the caller
//! ([`GameState`], [`Statistics`]). The only I/O is in [`store`] and
//! [`config`].

pub mod config;
pub mod errors;
pub mod game;
pub mod guess;
pub mod score;
pub mod secret;
pub mod stats;
pub mod store;

pub use config::{load_config, GameConfig};
pub use errors::{ConfigError, GameError, GuessError};
pub use game::{GameState, GameStatus, HistoryEntry, Turn};
pub use guess::{is_valid_guess, Guess, CODE_LENGTH};
pub use score::{evaluate_guess, Score};
pub use secret::{generate_secret, generate_secret_with, Secret};
pub use stats::Statistics;
pub use store::{generate_and_save_secret, FileSecretStore, SecretStore, StoreError, StoreResult};
