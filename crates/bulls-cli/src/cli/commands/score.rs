use bulls_core::{Guess, Score, Secret};
use serde::Serialize;

use super::super::args::{OutputFormat, ScoreArgs};
use crate::exit_codes::{EXIT_SUCCESS, INVALID_INPUT};

#[derive(Debug, Serialize)]
struct ScoreReport {
    guess: String,
    secret: String,
    #[serde(flatten)]
    score: Score,
}

pub fn run(args: ScoreArgs) -> anyhow::Result<i32> {
    let guess = match Guess::parse(&args.guess) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid guess `{}`: {e}", args.guess);
            return Ok(INVALID_INPUT);
        }
    };
    let secret = match Secret::parse(&args.secret) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("invalid secret `{}`: {e}", args.secret);
            return Ok(INVALID_INPUT);
        }
    };

    let score = Score::of(&guess, &secret);
    match args.format {
        OutputFormat::Text => println!("{score}"),
        OutputFormat::Json => {
            let report = ScoreReport {
                guess: guess.to_string(),
                secret: secret.to_string(),
                score,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(EXIT_SUCCESS)
}
