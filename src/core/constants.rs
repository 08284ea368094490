//! Constants used throughout keydock.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.keydock.toml).
pub const CONFIG_FILE: &str = ".keydock.toml";

/// Separator between the realm token and the account in a lookup key.
pub const KEY_SEPARATOR: char = '_';

/// Name of the encoding scheme applied to non-safelisted realms.
///
/// Surfaced in codec error messages so operators know how to regenerate
/// an override key.
pub const ENCODING_SCHEME: &str = "Base64";

/// Environment variable naming an override file to consult.
pub const OVERRIDES_FILE_VAR: &str = "KEYDOCK_OVERRIDES";

/// Environment variable enabling process-environment overrides ("1" or "true").
pub const OVERRIDES_FROM_ENV_VAR: &str = "KEYDOCK_OVERRIDES_FROM_ENV";

/// Environment variable that force-disables all overrides for a run.
pub const NO_OVERRIDES_VAR: &str = "KEYDOCK_NO_OVERRIDES";

/// Environment variable controlling the tracing filter.
pub const LOG_FILTER_VAR: &str = "KEYDOCK_LOG";
