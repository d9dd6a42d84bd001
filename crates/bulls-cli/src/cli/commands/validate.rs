use bulls_core::is_valid_guess;

use super::super::args::ValidateArgs;
use crate::exit_codes::{EXIT_SUCCESS, INVALID_INPUT};

pub fn run(args: ValidateArgs) -> i32 {
    match is_valid_guess(&args.input) {
        (true, _) => {
            println!("valid");
            EXIT_SUCCESS
        }
        (false, reason) => {
            println!("invalid: {reason}");
            INVALID_INPUT
        }
    }
}
