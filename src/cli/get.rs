//! Get command.
//!
//! Resolves a secret through the override chain and the platform keyring,
//! printing the value verbatim for use in scripts.

use std::path::PathBuf;

use tracing::debug;

use crate::core::config::Config;
use crate::core::overrides::{OverrideSource, OverrideStore};
use crate::core::resolver::Resolver;
use crate::core::store::Keyring;
use crate::error::Result;

/// Resolve and print a secret.
pub fn execute(
    realm: &str,
    account: &str,
    overrides: Option<PathBuf>,
    from_env: bool,
    no_overrides: bool,
) -> Result<()> {
    let source = select_source(overrides, from_env, no_overrides)?;
    debug!(source = ?source, "override source selected");

    let table = match &source {
        Some(source) => Some(OverrideStore::open(source)?),
        None => None,
    };

    let value = Resolver::new(Keyring, table).resolve(realm, account)?;

    // Plain output for scripting - no decoration
    println!("{}", value.as_str());
    Ok(())
}

/// Pick the override source for this invocation.
///
/// Flags win over environment variables, which win over `.keydock.toml`.
fn select_source(
    overrides: Option<PathBuf>,
    from_env: bool,
    no_overrides: bool,
) -> Result<Option<OverrideSource>> {
    if no_overrides {
        return Ok(None);
    }
    if let Some(path) = overrides {
        return Ok(Some(OverrideSource::File(path)));
    }
    if from_env {
        return Ok(Some(OverrideSource::Environment));
    }

    let config = Config::load_or_default()?;
    Ok(OverrideSource::detect(&config))
}
