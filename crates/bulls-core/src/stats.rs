use serde::Serialize;

use crate::game::{GameState, GameStatus};

/// Results across the games of one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total_games: u32,
    pub victories: u32,
    /// Fewest attempts needed to win, if any game was won.
    pub best_score: Option<u32>,
}

impl Statistics {
    /// Counts a finished game. Games still in progress are ignored.
    pub fn record(&mut self, game: &GameState) {
        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Abandoned => self.total_games += 1,
            GameStatus::Won => {
                self.total_games += 1;
                self.victories += 1;
                let attempts = game.attempts();
                self.best_score = Some(self.best_score.map_or(attempts, |b| b.min(attempts)));
            }
        }
    }

    /// Percentage of games won; `0.0` before any game finishes.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        f64::from(self.victories) / f64::from(self.total_games) * 100.0
    }
}
