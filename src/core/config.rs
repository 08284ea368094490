//! Configuration file management.
//!
//! Handles reading `.keydock.toml` configuration files. The config is
//! optional: resolution works without one, and a missing file is simply the
//! default configuration (no override source, overrides enabled if one is
//! supplied some other way).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.keydock.toml`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override source settings
    #[serde(default)]
    pub overrides: Overrides,
}

/// The `[overrides]` table.
#[derive(Debug, Serialize, Deserialize)]
pub struct Overrides {
    /// Whether override sources participate in resolution at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Path to a `key=value` override file
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Whether to consult the process environment for overrides
    #[serde(default, rename = "from-env")]
    pub from_env: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
            from_env: false,
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load the configuration for this run.
    ///
    /// A missing `.keydock.toml` is not an error; it yields the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file exists but is malformed.
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load the configuration from an explicit path, defaulting when absent.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            path = %path.display(),
            enabled = config.overrides.enabled,
            file = ?config.overrides.file,
            from_env = config.overrides.from_env,
            "config loaded"
        );

        Ok(config)
    }
}
