//! Set command.
//!
//! Writes a secret to the platform keyring. Override sources are never a
//! write target.

use tracing::info;

use crate::cli::output;
use crate::core::resolver::Resolver;
use crate::core::store::Keyring;
use crate::error::Result;

/// Store a secret.
pub fn execute(realm: &str, account: &str, value: &str) -> Result<()> {
    info!(realm = %realm, account = %account, "setting secret");

    let overwrote = Resolver::new(Keyring, None).store(realm, account, value)?;

    if overwrote {
        output::success(&format!(
            "replaced secret for {}",
            output::key(&identifier(realm, account))
        ));
    } else {
        output::success(&format!(
            "stored secret for {}",
            output::key(&identifier(realm, account))
        ));
    }

    Ok(())
}

fn identifier(realm: &str, account: &str) -> String {
    format!("{}@{}", account, realm)
}
