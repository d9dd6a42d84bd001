use anyhow::Context;
use bulls_core::generate_and_save_secret;

use super::super::args::NewSecretArgs;
use super::config_path::{resolve_config, secret_store};
use crate::exit_codes::EXIT_SUCCESS;

pub fn run(args: NewSecretArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(&args.config)?;
    let store = secret_store(&cfg, args.secret_file.as_deref());
    let secret = generate_and_save_secret(&store)
        .with_context(|| format!("saving secret to {}", store.path().display()))?;

    eprintln!("✓ Saved new secret to {}", store.path().display());
    if args.show {
        println!("{secret}");
    }
    Ok(EXIT_SUCCESS)
}
