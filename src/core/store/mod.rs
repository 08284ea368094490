//! Native secret store access.
//!
//! Abstracts get/set against the operating system's credential facility so
//! the resolver can be exercised against an in-memory double in tests.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module

use crate::core::secret::SecretValue;
use crate::error::Result;

mod keyring;

#[cfg(test)]
pub mod memory;

pub use self::keyring::Keyring;

/// Secret storage trait.
///
/// Implementations are addressed by the raw (realm, account) pair; no
/// encoding is applied. The backing facility must preserve values byte for
/// byte across store and retrieve.
pub trait SecretStore {
    /// Look up the secret for a (realm, account) pair.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no such secret exists — distinct from a store
    /// failure, which is an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing facility cannot be reached.
    fn get(&self, realm: &str, account: &str) -> Result<Option<SecretValue>>;

    /// Store a secret for a (realm, account) pair, replacing any prior value.
    ///
    /// # Returns
    ///
    /// `true` when a prior value existed and was overwritten.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backing facility cannot be reached or
    /// refuses the write.
    fn set(&self, realm: &str, account: &str, value: &str) -> Result<bool>;
}
