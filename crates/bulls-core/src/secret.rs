use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::GuessError;
use crate::guess::{fmt_code, parse_code, Guess, CODE_LENGTH};

const DIGITS: [u8; 10] = *b"0123456789";

/// The hidden code for one game. Immutable once created.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Secret([u8; CODE_LENGTH]);

impl Secret {
    /// Parses a stored or user-supplied secret; same rules as a guess.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        parse_code(input).map(Self)
    }

    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    pub fn matches(&self, guess: &Guess) -> bool {
        &self.0 == guess.digits()
    }
}

impl FromStr for Secret {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_code(&self.0, f)
    }
}

// Keep secrets out of debug logs.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// Generates a secret from the thread-local RNG.
pub fn generate_secret() -> Secret {
    generate_secret_with(&mut rand::thread_rng())
}

/// Draws 4 distinct digits without replacement, in draw order.
///
/// A partial Fisher-Yates shuffle of `0..=9`, so each of the 10*9*8*7 ordered
/// selections is equally likely.
pub fn generate_secret_with<R: Rng + ?Sized>(rng: &mut R) -> Secret {
    let mut pool = DIGITS;
    let (drawn, _) = pool.partial_shuffle(rng, CODE_LENGTH);
    let mut code = [0u8; CODE_LENGTH];
    code.copy_from_slice(drawn);
    Secret(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn generated_secrets_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let secret = generate_secret_with(&mut rng);
            let text = secret.to_string();
            assert_eq!(text.len(), CODE_LENGTH);
            assert!(Secret::parse(&text).is_ok(), "malformed secret {text}");
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let a = generate_secret_with(&mut StdRng::seed_from_u64(7));
        let b = generate_secret_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn covers_leading_zero_and_every_position() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen = [[false; 10]; CODE_LENGTH];
        for _ in 0..5_000 {
            let secret = generate_secret_with(&mut rng);
            for (pos, digit) in secret.digits().iter().enumerate() {
                seen[pos][usize::from(digit - b'0')] = true;
            }
        }
        for (pos, digits) in seen.iter().enumerate() {
            assert!(
                digits.iter().all(|&s| s),
                "position {pos} never produced some digit: {digits:?}"
            );
        }
    }

    #[test]
    fn reaches_a_large_share_of_the_space() {
        let mut rng = StdRng::seed_from_u64(99);
        let distinct: HashSet<String> = (0..20_000)
            .map(|_| generate_secret_with(&mut rng).to_string())
            .collect();
        // 5040 possible; 20k draws should hit nearly all of them
        assert!(distinct.len() > 4_800, "only {} distinct", distinct.len());
    }

    #[test]
    fn each_position_draws_digits_evenly() {
        const DRAWS: u32 = 200_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [[0u32; 10]; CODE_LENGTH];
        for _ in 0..DRAWS {
            for (pos, digit) in generate_secret_with(&mut rng).digits().iter().enumerate() {
                counts[pos][usize::from(digit - b'0')] += 1;
            }
        }
        // expected 20_000 per cell, sd ~134; 3% is ~4.5 sd
        let expected = f64::from(DRAWS) / 10.0;
        for (pos, row) in counts.iter().enumerate() {
            for (digit, &n) in row.iter().enumerate() {
                let dev = (f64::from(n) - expected).abs() / expected;
                assert!(dev < 0.03, "position {pos} digit {digit}: {n} draws");
            }
        }
    }

    #[test]
    fn all_secrets_equally_likely() {
        const SPACE: usize = 10 * 9 * 8 * 7;
        const DRAWS: usize = SPACE * 100;
        let mut rng = StdRng::seed_from_u64(5040);
        let mut counts = vec![0u32; 10_000];
        for _ in 0..DRAWS {
            let idx = generate_secret_with(&mut rng)
                .digits()
                .iter()
                .fold(0usize, |acc, d| acc * 10 + usize::from(d - b'0'));
            counts[idx] += 1;
        }

        let expected = (DRAWS / SPACE) as f64;
        let hit = counts.iter().filter(|&&n| n > 0).count();
        assert!(hit <= SPACE, "{hit} buckets hit, only {SPACE} are valid");
        let chi_sq: f64 = counts
            .iter()
            .filter(|&&n| n > 0)
            .map(|&n| (f64::from(n) - expected).powi(2) / expected)
            .sum::<f64>()
            + (SPACE - hit) as f64 * expected;
        // 5039 degrees of freedom: mean 5039, sd ~100
        assert!(chi_sq < 5_540.0, "chi-square {chi_sq:.1} over {SPACE} buckets");
    }

    #[test]
    fn thread_rng_entry_point() {
        let secret = generate_secret();
        assert!(Secret::parse(&secret.to_string()).is_ok());
    }

    #[test]
    fn debug_hides_digits() {
        let secret = Secret::parse("1234").unwrap();
        assert_eq!(format!("{secret:?}"), "Secret(****)");
    }

    #[test]
    fn matches_only_identical_guess() {
        let secret = Secret::parse("1234").unwrap();
        assert!(secret.matches(&Guess::parse("1234").unwrap()));
        assert!(!secret.matches(&Guess::parse("4321").unwrap()));
    }
}
