//! Platform keyring backend.
//!
//! Delegates to the operating system's credential facility via the `keyring`
//! crate:
//!   - Linux: D-Bus Secret Service (GNOME Keyring / KDE Wallet)
//!   - macOS: Security.framework Keychain
//!   - Windows: Windows Credential Manager
//!
//! Entries are addressed by the raw (realm, account) pair — the facility
//! accepts arbitrary strings for both fields, so no encoding is applied.

use tracing::{debug, info};

use crate::core::secret::SecretValue;
use crate::core::store::SecretStore;
use crate::error::{Result, StoreError};

/// Native secret store backed by the platform keyring.
pub struct Keyring;

impl Keyring {
    fn entry(realm: &str, account: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(realm, account).map_err(|e| {
            StoreError::Unavailable(format!("cannot open keyring entry: {}", e)).into()
        })
    }
}

impl SecretStore for Keyring {
    fn get(&self, realm: &str, account: &str) -> Result<Option<SecretValue>> {
        debug!(realm = %realm, account = %account, "querying platform keyring");

        match Self::entry(realm, account)?.get_password() {
            Ok(value) => {
                debug!(realm = %realm, account = %account, "keyring hit");
                Ok(Some(SecretValue::new(value)))
            }
            Err(keyring::Error::NoEntry) => {
                debug!(realm = %realm, account = %account, "keyring miss");
                Ok(None)
            }
            Err(e) => Err(StoreError::Backend(e.to_string()).into()),
        }
    }

    fn set(&self, realm: &str, account: &str, value: &str) -> Result<bool> {
        let entry = Self::entry(realm, account)?;

        // A write replaces any prior value; callers get told whether one existed.
        let existed = match entry.get_password() {
            Ok(_) => true,
            Err(keyring::Error::NoEntry) => false,
            Err(e) => return Err(StoreError::Backend(e.to_string()).into()),
        };

        entry
            .set_password(value)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        info!(
            realm = %realm,
            account = %account,
            overwrote = existed,
            "stored secret in platform keyring"
        );

        Ok(existed)
    }
}
