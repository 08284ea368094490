//! Command-line interface.

pub mod completions;
pub mod get;
pub mod key;
pub mod output;
pub mod set;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Keydock - keyring-backed secret resolution for automated builds.
#[derive(Parser)]
#[command(
    name = "keydock",
    about = "Keyring-backed secret resolution for automated builds",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a secret and print it
    Get {
        /// Realm the secret belongs to (e.g., a host name or URL)
        realm: String,
        /// Account within the realm
        account: String,
        /// Consult a key=value override file
        #[arg(long, value_name = "PATH")]
        overrides: Option<PathBuf>,
        /// Consult the process environment for overrides
        #[arg(long)]
        from_env: bool,
        /// Ignore every override source for this call
        #[arg(long, conflicts_with_all = ["overrides", "from_env"])]
        no_overrides: bool,
    },

    /// Store a secret in the platform keyring
    Set {
        /// Realm the secret belongs to
        realm: String,
        /// Account within the realm
        account: String,
        /// Secret value, stored verbatim
        value: String,
    },

    /// Print the lookup key an override source must use
    Key {
        /// Realm the secret belongs to
        realm: String,
        /// Account within the realm
        account: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Get {
            realm,
            account,
            overrides,
            from_env,
            no_overrides,
        } => get::execute(&realm, &account, overrides, from_env, no_overrides),
        Set {
            realm,
            account,
            value,
        } => set::execute(&realm, &account, &value),
        Key {
            realm,
            account,
            json,
        } => key::execute(&realm, &account, json),
        Completions { shell } => completions::execute(shell),
    }
}
