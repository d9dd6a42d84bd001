use super::args::*;

pub mod config_path;
pub mod new_secret;
pub mod play;
pub mod score;
pub mod validate;

use crate::exit_codes::EXIT_SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Play(args) => play::run(args),
        Command::Score(args) => score::run(args),
        Command::Validate(args) => Ok(validate::run(args)),
        Command::NewSecret(args) => new_secret::run(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(EXIT_SUCCESS)
        }
    }
}
