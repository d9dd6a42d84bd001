//! Single-game state machine: `InProgress -> Won | Abandoned`.
//!
//! A [`GameState`] is an ordinary value owned by whoever runs the game, so
//! separate sessions never share anything.

use std::fmt;

use tracing::debug;

use crate::errors::GameError;
use crate::guess::Guess;
use crate::score::Score;
use crate::secret::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Abandoned,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Abandoned => "abandoned",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub score: Score,
}

/// Result of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Scored(Score),
    Won { attempts: u32 },
}

#[derive(Debug, Clone)]
pub struct GameState {
    secret: Secret,
    history: Vec<HistoryEntry>,
    attempts: u32,
    status: GameStatus,
}

impl GameState {
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            history: Vec::new(),
            attempts: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Scores `guess` and records it. The winning guess is recorded too, so
    /// `attempts() == history().len()` always holds.
    pub fn submit(&mut self, guess: Guess) -> Result<Turn, GameError> {
        self.ensure_in_progress()?;

        let score = Score::of(&guess, &self.secret);
        self.attempts += 1;
        self.history.push(HistoryEntry { guess, score });
        debug!(attempt = self.attempts, %guess, %score, "guess scored");

        if self.secret.matches(&guess) {
            self.status = GameStatus::Won;
            return Ok(Turn::Won {
                attempts: self.attempts,
            });
        }
        Ok(Turn::Scored(score))
    }

    /// Gives up and reveals the secret.
    pub fn abandon(&mut self) -> Result<&Secret, GameError> {
        self.ensure_in_progress()?;
        self.status = GameStatus::Abandoned;
        debug!(attempts = self.attempts, "game abandoned");
        Ok(&self.secret)
    }

    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::Finished {
                status: self.status,
            });
        }
        Ok(())
    }
}
