//! Guess validation.

use std::fmt;
use std::str::FromStr;

use crate::errors::GuessError;

/// Number of digits in every secret and guess.
pub const CODE_LENGTH: usize = 4;

/// Parses a 4-digit code with pairwise distinct ASCII digits.
///
/// Checks run in a fixed order (digits, length, uniqueness) so that the
/// reported reason is stable: `"123"` is a length error, `"12a"` a digit error.
pub(crate) fn parse_code(input: &str) -> Result<[u8; CODE_LENGTH], GuessError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::NonDigit);
    }

    // All ASCII from here on, so byte length == char count.
    let bytes = input.as_bytes();
    let code: [u8; CODE_LENGTH] = bytes
        .try_into()
        .map_err(|_| GuessError::WrongLength { len: bytes.len() })?;

    for (i, digit) in code.iter().enumerate() {
        if code[i + 1..].contains(digit) {
            return Err(GuessError::RepeatedDigit {
                digit: char::from(*digit),
            });
        }
    }

    Ok(code)
}

pub(crate) fn fmt_code(code: &[u8; CODE_LENGTH], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for &digit in code {
        fmt::Write::write_char(f, char::from(digit))?;
    }
    Ok(())
}

/// A validated player guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([u8; CODE_LENGTH]);

impl Guess {
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        parse_code(input).map(Self)
    }

    /// ASCII digits in guess order.
    pub fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_code(&self.0, f)
    }
}

/// String-level validator: `(true, "")` for a well-formed guess, otherwise
/// `(false, reason)`.
pub fn is_valid_guess(input: &str) -> (bool, String) {
    match parse_code(input) {
        Ok(_) => (true, String::new()),
        Err(e) => (false, e.to_string()),
    }
}
