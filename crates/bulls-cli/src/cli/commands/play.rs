//! Interactive terminal game.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::Context;
use bulls_core::{
    generate_secret, GameConfig, GameState, Guess, Secret, SecretStore, Statistics, Turn,
};
use tracing::{info, warn};

use super::super::args::PlayArgs;
use super::config_path::{resolve_config, secret_store};
use crate::exit_codes::EXIT_SUCCESS;

const RULE: &str = "==================================================";
const THIN_RULE: &str = "------------------------------";

pub fn run(args: PlayArgs) -> anyhow::Result<i32> {
    let mut cfg = resolve_config(&args.config)?;
    if args.persist {
        cfg.persist_secret = true;
    }
    if args.no_history {
        cfg.show_history = false;
    }
    let store = secret_store(&cfg, args.secret_file.as_deref());

    let mut resume = args.resume;
    let next_secret = || -> anyhow::Result<Secret> {
        if std::mem::take(&mut resume) {
            match store.load() {
                Ok(secret) => {
                    info!(path = %store.path().display(), "resuming stored secret");
                    return Ok(secret);
                }
                Err(e) if e.is_not_found() => {
                    warn!("{e}; starting with a fresh secret");
                }
                Err(e) => return Err(e).context("resuming stored secret"),
            }
        }
        let secret = generate_secret();
        if cfg.persist_secret {
            store
                .save(&secret)
                .with_context(|| format!("saving secret to {}", store.path().display()))?;
        }
        Ok(secret)
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout().lock(), &cfg);
    let stats = session.run(next_secret)?;
    info!(
        games = stats.total_games,
        victories = stats.victories,
        "session finished"
    );
    Ok(EXIT_SUCCESS)
}

/// One terminal session: any number of games until the player stops.
pub(crate) struct Session<'a, R, W> {
    input: R,
    out: W,
    cfg: &'a GameConfig,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(input: R, out: W, cfg: &'a GameConfig) -> Self {
        Self { input, out, cfg }
    }

    pub(crate) fn run(
        &mut self,
        mut next_secret: impl FnMut() -> anyhow::Result<Secret>,
    ) -> anyhow::Result<Statistics> {
        let mut stats = Statistics::default();
        loop {
            let mut game = GameState::new(next_secret()?);
            self.play_game(&mut game)?;
            stats.record(&game);
            if !self.play_again()? {
                break;
            }
        }
        self.print_stats(&stats)?;
        writeln!(
            self.out,
            "\nThanks for playing Bulls and Cows! See you next time!"
        )?;
        Ok(stats)
    }

    fn play_game(&mut self, game: &mut GameState) -> anyhow::Result<()> {
        self.print_welcome()?;
        let started = Instant::now();

        loop {
            if self.cfg.show_history {
                self.print_history(game)?;
            }
            let Some(guess) = self.read_guess()? else {
                let secret = game.abandon()?;
                writeln!(
                    self.out,
                    "\nThanks for playing! The secret number was {secret}."
                )?;
                return Ok(());
            };

            match game.submit(guess)? {
                Turn::Scored(score) => writeln!(self.out, "\nResult: {score}")?,
                Turn::Won { attempts } => {
                    let elapsed = started.elapsed().as_secs_f64();
                    writeln!(
                        self.out,
                        "\nCONGRATULATIONS! You've guessed the number: {}",
                        game.secret()
                    )?;
                    writeln!(
                        self.out,
                        "It took you {attempts} attempts and {elapsed:.1} seconds!"
                    )?;
                    return Ok(());
                }
            }
        }
    }

    /// `None` when the player quits or input ends.
    fn read_guess(&mut self) -> anyhow::Result<Option<Guess>> {
        loop {
            write!(self.out, "Enter your guess (4 unique digits): ")?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line == self.cfg.quit_word {
                return Ok(None);
            }
            match Guess::parse(&line) {
                Ok(guess) => return Ok(Some(guess)),
                Err(e) => writeln!(self.out, "Invalid input: {e}. Please try again.")?,
            }
        }
    }

    fn play_again(&mut self) -> anyhow::Result<bool> {
        loop {
            write!(self.out, "\nDo you want to play again? (y/n): ")?;
            self.out.flush()?;
            match self.read_line()?.as_deref() {
                None => return Ok(false),
                Some("y" | "yes") => return Ok(true),
                Some("n" | "no") => return Ok(false),
                Some(_) => writeln!(self.out, "Please enter 'y' or 'n'.")?,
            }
        }
    }

    /// Undecodable bytes become U+FFFD and fail guess validation.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_lowercase()))
    }

    fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n{RULE}")?;
        writeln!(self.out, "BULLS AND COWS")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(
            self.out,
            "\nI've selected a 4-digit number with unique digits."
        )?;
        writeln!(self.out, "Try to guess it with the following hints:")?;
        writeln!(self.out, "  - Bulls: correct digits in the correct position")?;
        writeln!(self.out, "  - Cows: correct digits in the wrong position")?;
        writeln!(
            self.out,
            "\nType '{}' to exit the game at any time.",
            self.cfg.quit_word
        )?;
        writeln!(self.out, "{RULE}\n")
    }

    fn print_history(&mut self, game: &GameState) -> io::Result<()> {
        if game.history().is_empty() {
            return Ok(());
        }
        writeln!(self.out, "\nGUESS HISTORY:")?;
        writeln!(self.out, "{THIN_RULE}")?;
        for (i, entry) in game.history().iter().enumerate() {
            writeln!(self.out, "{:2}. {} -> {}", i + 1, entry.guess, entry.score)?;
        }
        writeln!(self.out, "{THIN_RULE}")
    }

    fn print_stats(&mut self, stats: &Statistics) -> io::Result<()> {
        let best = stats
            .best_score
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        writeln!(
            self.out,
            "\nGames played: {} | Victories: {} | Win rate: {:.1}% | Best score: {}",
            stats.total_games,
            stats.victories,
            stats.win_rate(),
            best
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(input: &str, secrets: &[&str], cfg: &GameConfig) -> (Statistics, String) {
        play_bytes(input.as_bytes(), secrets, cfg)
    }

    fn play_bytes(input: &[u8], secrets: &[&str], cfg: &GameConfig) -> (Statistics, String) {
        let mut secrets = secrets.iter().map(|s| Secret::parse(s).unwrap());
        let mut out = Vec::new();
        let stats = Session::new(Cursor::new(input.to_vec()), &mut out, cfg)
            .run(|| Ok(secrets.next().expect("ran out of secrets")))
            .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_after_feedback() {
        let cfg = GameConfig::default();
        let (stats, out) = play("7814\n7846\nn\n", &["7846"], &cfg);

        assert!(out.contains("Result: 2 Bulls, 1 Cows"), "{out}");
        assert!(out.contains(" 1. 7814 -> 2 Bulls, 1 Cows"), "{out}");
        assert!(out.contains("You've guessed the number: 7846"), "{out}");
        assert!(out.contains("It took you 2 attempts"), "{out}");
        assert_eq!(stats.victories, 1);
        assert_eq!(stats.best_score, Some(2));
    }

    #[test]
    fn invalid_input_is_not_counted() {
        let cfg = GameConfig::default();
        let (stats, out) = play("12a4\n123\n1123\n1234\nno\n", &["1234"], &cfg);

        assert!(out.contains("Invalid input: must contain only digits. Please try again."));
        assert!(out.contains("Invalid input: must be exactly 4 digits long."));
        assert!(out.contains("Invalid input: all digits must be unique."));
        assert!(out.contains("It took you 1 attempts"), "{out}");
        assert_eq!(stats.best_score, Some(1));
    }

    #[test]
    fn non_utf8_line_is_rejected_and_prompted_again() {
        let cfg = GameConfig::default();
        let (stats, out) = play_bytes(b"\xff\xfe\n1234\nn\n", &["1234"], &cfg);

        assert!(out.contains("Invalid input: must contain only digits."), "{out}");
        assert!(out.contains("It took you 1 attempts"), "{out}");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.victories, 1);
    }

    #[test]
    fn quit_reveals_secret_and_counts_a_loss() {
        let cfg = GameConfig::default();
        let (stats, out) = play("5678\n  QUIT \nn\n", &["1234"], &cfg);

        assert!(out.contains("The secret number was 1234."), "{out}");
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.victories, 0);
        assert!(out.contains("Win rate: 0.0% | Best score: -"), "{out}");
    }

    #[test]
    fn play_again_starts_a_fresh_game() {
        let cfg = GameConfig::default();
        let input = "0123\nmaybe\nyes\n9876\n4567\nn\n";
        let (stats, out) = play(input, &["0123", "4567"], &cfg);

        assert!(out.contains("Please enter 'y' or 'n'."));
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.victories, 2);
        assert_eq!(stats.best_score, Some(1));
        // second game's history must not carry the first game's guesses
        assert!(!out.contains(" 1. 0123"), "{out}");
        assert!(out.contains(" 1. 9876 -> 0 Bulls, 2 Cows"), "{out}");
    }

    #[test]
    fn eof_abandons_and_ends_session() {
        let cfg = GameConfig::default();
        let (stats, out) = play("5678\n", &["1234"], &cfg);

        assert!(out.contains("The secret number was 1234."));
        assert!(out.contains("See you next time!"));
        assert_eq!(stats.total_games, 1);
    }

    #[test]
    fn custom_quit_word_and_hidden_history() {
        let cfg = GameConfig {
            quit_word: "exit".to_string(),
            show_history: false,
            ..GameConfig::default()
        };
        let (_, out) = play("5678\nquit\nexit\nn\n", &["1234"], &cfg);

        assert!(out.contains("Type 'exit' to exit"));
        assert!(out.contains("Invalid input: must contain only digits."));
        assert!(!out.contains("GUESS HISTORY"));
        assert!(out.contains("The secret number was 1234."));
    }
}
