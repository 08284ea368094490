//! Error types for keydock operations.
//!
//! Each subsystem has its own error enum; the top-level [`Error`] folds them
//! together so callers can use a single `Result` alias. Error messages never
//! contain secret values.

use std::path::PathBuf;

use thiserror::Error;

/// Identifier codec failures.
///
/// Raised when an override entry's key does not decode under the expected
/// encoding scheme. The messages name the scheme (Base64) so an operator can
/// regenerate the key.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("override key realm token '{token}' is not valid Base64: {reason}")]
    InvalidToken { token: String, reason: String },

    #[error("override key realm token '{token}' is valid Base64 but not UTF-8 text")]
    NonUtf8Token { token: String },

    #[error("override key '{key}' has no '_' separator between realm and account")]
    MissingSeparator { key: String },
}

/// Native secret store failures.
///
/// The platform credential facility is local; failures are fatal to the
/// calling operation and never retried.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("platform keyring unavailable: {0}")]
    Unavailable(String),

    #[error("keyring operation failed: {0}")]
    Backend(String),
}

/// Override store construction failures.
#[derive(Error, Debug)]
pub enum OverrideError {
    #[error("cannot read override file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    ReadFile(std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Resolution failures.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no secret found for realm '{realm}' and account '{account}'")]
    NotFound { realm: String, account: String },
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Override(#[from] OverrideError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
