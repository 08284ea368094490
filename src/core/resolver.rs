//! Secret resolution engine.
//!
//! Orchestrates the backend chain: the override table (when enabled) is
//! consulted first and short-circuits the native store; the native store
//! answers everything else. Writes always target the native store — the
//! override table is a read-only injection point for automated environments,
//! never a write target.
//!
//! Every call re-derives its keys and re-queries its backends. There is no
//! cache, so a value written between two resolutions is observed by the
//! next one, and the entry points are safe to call from any number of
//! independent places in the same process.

use tracing::debug;

use crate::core::config::Config;
use crate::core::overrides::{OverrideSource, OverrideStore};
use crate::core::secret::SecretValue;
use crate::core::store::{Keyring, SecretStore};
use crate::error::{ResolveError, Result};

/// The resolution engine: a native store plus an optional override table.
///
/// Override enablement is modeled as construct-or-not: a resolver built
/// without a table never consults one.
pub struct Resolver<S> {
    native: S,
    overrides: Option<OverrideStore>,
}

impl<S: SecretStore> Resolver<S> {
    pub fn new(native: S, overrides: Option<OverrideStore>) -> Self {
        Self { native, overrides }
    }

    /// Resolve the secret for a (realm, account) pair.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::NotFound` when neither enabled backend holds a
    /// value, `CodecError` when an override entry for this identifier is
    /// malformed (this wins over a native-store hit — a broken override is
    /// a configuration bug to surface, not mask), and `StoreError` when the
    /// native facility fails.
    pub fn resolve(&self, realm: &str, account: &str) -> Result<SecretValue> {
        debug!(
            realm = %realm,
            account = %account,
            overrides = self.overrides.is_some(),
            "resolving secret"
        );

        if let Some(overrides) = &self.overrides {
            if let Some(value) = overrides.get(realm, account)? {
                return Ok(value);
            }
        }

        match self.native.get(realm, account)? {
            Some(value) => Ok(value),
            None => Err(ResolveError::NotFound {
                realm: realm.to_string(),
                account: account.to_string(),
            }
            .into()),
        }
    }

    /// Store a secret for a (realm, account) pair in the native store.
    ///
    /// # Returns
    ///
    /// `true` when a prior value existed and was overwritten.
    pub fn store(&self, realm: &str, account: &str, value: &str) -> Result<bool> {
        debug!(realm = %realm, account = %account, "storing secret");
        self.native.set(realm, account, value)
    }
}

/// Resolve a secret using the ambient configuration.
///
/// Builds a fresh resolver per call: override sources are re-detected from
/// the environment and `.keydock.toml`, so the function is callable from
/// any point of a build's lifetime without shared state.
pub fn get_secret(realm: &str, account: &str) -> Result<SecretValue> {
    let config = Config::load_or_default()?;
    let overrides = match OverrideSource::detect(&config) {
        Some(source) => Some(OverrideStore::open(&source)?),
        None => None,
    };

    Resolver::new(Keyring, overrides).resolve(realm, account)
}

/// Store a secret in the platform keyring.
///
/// # Returns
///
/// `true` when a prior value existed and was overwritten.
pub fn set_secret(realm: &str, account: &str, value: &str) -> Result<bool> {
    Resolver::new(Keyring, None).store(realm, account, value)
}
