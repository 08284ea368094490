//! Override store.
//!
//! A read-only secret source for automated environments, populated either
//! from a `key=value` file or from the process environment. Keys are
//! produced by the identifier codec; values are kept byte for byte — the
//! raw remainder of the line after the first `=`, with no quoting, no
//! escaping, and no trimming.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::codec;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::secret::SecretValue;
use crate::error::{OverrideError, Result};

/// Where an override table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideSource {
    /// A local newline-delimited `key=value` file.
    File(PathBuf),
    /// The process environment.
    Environment,
}

impl OverrideSource {
    /// Select the override source for this run.
    ///
    /// Environment variables win over the config file; a file source wins
    /// over the environment source when both are requested. Returns `None`
    /// when overrides are disabled or no source is configured.
    pub fn detect(config: &Config) -> Option<Self> {
        if env_flag(constants::NO_OVERRIDES_VAR) {
            debug!("overrides disabled via {}", constants::NO_OVERRIDES_VAR);
            return None;
        }
        if !config.overrides.enabled {
            debug!("overrides disabled in config");
            return None;
        }

        if let Ok(path) = std::env::var(constants::OVERRIDES_FILE_VAR) {
            if !path.is_empty() {
                return Some(Self::File(PathBuf::from(path)));
            }
        }
        if env_flag(constants::OVERRIDES_FROM_ENV_VAR) {
            return Some(Self::Environment);
        }

        if let Some(path) = &config.overrides.file {
            return Some(Self::File(path.clone()));
        }
        if config.overrides.from_env {
            return Some(Self::Environment);
        }

        None
    }
}

/// Whether a boolean environment switch is set.
fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(v) => !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"),
        Err(_) => false,
    }
}

/// An immutable table of override entries, keyed by codec output.
pub struct OverrideStore {
    entries: BTreeMap<String, String>,
}

impl std::fmt::Debug for OverrideStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl OverrideStore {
    /// Construct the table from a source, reading all entries eagerly.
    pub fn open(source: &OverrideSource) -> Result<Self> {
        match source {
            OverrideSource::File(path) => Self::from_file(path),
            OverrideSource::Environment => Ok(Self::from_env()),
        }
    }

    /// Parse a `key=value` file.
    ///
    /// Each line is split at the first `=`; the key is everything before it
    /// and the value is the raw remainder, preserving embedded `=`,
    /// whitespace, and punctuation. Blank lines, `#` comments, and lines
    /// without a `=` are skipped. A trailing `\r` is stripped so CRLF files
    /// parse the same as LF files.
    ///
    /// # Errors
    ///
    /// Returns `OverrideError::ReadFile` if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| OverrideError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut entries = BTreeMap::new();
        for line in contents.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.to_string(), value.to_string());
            }
        }

        debug!(path = %path.display(), entries = entries.len(), "loaded override file");

        Ok(Self { entries })
    }

    /// Snapshot the process environment as an override table.
    pub fn from_env() -> Self {
        let entries: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        debug!(entries = entries.len(), "loaded overrides from process environment");

        Self { entries }
    }

    /// Build a table directly from pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the override value for a (realm, account) pair.
    ///
    /// The lookup is exact, keyed by the codec's output — no partial
    /// matches. On a miss for a realm that required encoding, entries
    /// written for the same account are validated: a realm token that
    /// neither passes the safelist nor decodes as Base64 is a malformed
    /// override entry and surfaces a `CodecError` instead of being
    /// silently skipped.
    pub fn get(&self, realm: &str, account: &str) -> Result<Option<SecretValue>> {
        let key = codec::lookup_key(realm, account);

        if let Some(value) = self.entries.get(&key) {
            debug!(realm = %realm, account = %account, "override hit");
            return Ok(Some(SecretValue::new(value.as_str())));
        }

        if !codec::is_plain(realm) {
            for entry_key in self.entries.keys() {
                let Ok((token, entry_account)) = codec::split_key(entry_key) else {
                    continue;
                };
                if entry_account != account || codec::is_plain(token) {
                    continue;
                }
                // Malformed tokens are configuration bugs the operator must
                // fix; decoding errors propagate rather than fall through.
                codec::decode_realm(token)?;
            }
        }

        debug!(realm = %realm, account = %account, "override miss");
        Ok(None)
    }
}
