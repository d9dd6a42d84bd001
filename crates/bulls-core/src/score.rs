//! Guess scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::guess::{Guess, CODE_LENGTH};
use crate::secret::Secret;

/// Bulls: right digit, right position. Cows: right digit, wrong position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub bulls: u32,
    pub cows: u32,
}

impl Score {
    pub const WIN: Score = Score {
        bulls: CODE_LENGTH as u32,
        cows: 0,
    };

    pub fn of(guess: &Guess, secret: &Secret) -> Self {
        count(guess.digits().iter().copied(), secret.digits())
    }

    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Bulls, {} Cows", self.bulls, self.cows)
    }
}

/// Scores two raw strings without validating them.
///
/// Each guess position contributes at most once: nothing if its digit is not
/// in the secret, a bull if the secret has it at the same position, a cow
/// otherwise. Never panics on malformed input; a position past the end of the
/// secret can only be a cow.
pub fn evaluate_guess(guess: &str, secret: &str) -> Score {
    let secret: Vec<char> = secret.chars().collect();
    count(guess.chars(), &secret)
}

fn count<T: PartialEq>(guess: impl IntoIterator<Item = T>, secret: &[T]) -> Score {
    let mut score = Score::default();
    for (i, digit) in guess.into_iter().enumerate() {
        if !secret.contains(&digit) {
            continue;
        }
        if secret.get(i) == Some(&digit) {
            score.bulls += 1;
        } else {
            score.cows += 1;
        }
    }
    score
}
