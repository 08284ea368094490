//! In-memory secret store for tests.
//!
//! Keeps resolver tests off the real platform keyring. Entries live in a
//! mutex-guarded map keyed by the raw (realm, account) pair, matching the
//! addressing of the keyring backend.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::core::secret::SecretValue;
use crate::core::store::SecretStore;
use crate::error::{Result, StoreError};

/// Test double for the native store.
#[derive(Default)]
pub struct Memory {
    entries: Mutex<BTreeMap<(String, String), String>>,
    /// When set, every operation fails as if the facility were unreachable.
    unavailable: bool,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation reports `StoreError`.
    pub fn unreachable() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            unavailable: true,
        }
    }

    /// Seed a value directly, bypassing the trait.
    pub fn seed(&self, realm: &str, account: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert((realm.to_string(), account.to_string()), value.to_string());
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unavailable {
            return Err(StoreError::Unavailable("test store is unreachable".to_string()).into());
        }
        Ok(())
    }
}

impl SecretStore for Memory {
    fn get(&self, realm: &str, account: &str) -> Result<Option<SecretValue>> {
        self.check_reachable()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(realm.to_string(), account.to_string()))
            .map(|v| SecretValue::new(v.as_str())))
    }

    fn set(&self, realm: &str, account: &str, value: &str) -> Result<bool> {
        self.check_reachable()?;
        let prior = self
            .entries
            .lock()
            .unwrap()
            .insert((realm.to_string(), account.to_string()), value.to_string());
        Ok(prior.is_some())
    }
}
