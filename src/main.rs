//! Keydock - keyring-backed secret resolution for automated builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keydock::cli::output;
use keydock::cli::{execute, Cli};
use keydock::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_FILTER_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keydock=debug")
        } else {
            EnvFilter::new("keydock=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            keydock::error::Error::Codec(_) => {
                Some("run: keydock key <realm> <account> to print the expected override key")
            }
            keydock::error::Error::Store(_) => {
                Some("is a platform keyring service available in this environment?")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
