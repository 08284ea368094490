//! Secret value type.
//!
//! Wraps a resolved secret so it cannot leak through `Debug` formatting or
//! tracing output, and is zeroized when dropped. The wrapped string is
//! opaque: keydock never inspects, normalizes, or limits its character set.

use zeroize::Zeroize;

/// An opaque secret value.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue(String);

impl Drop for SecretValue {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl SecretValue {
    /// Wrap a raw secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw secret, byte for byte as the backend returned it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretValue([redacted])")
    }
}
