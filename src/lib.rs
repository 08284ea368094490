//! Keydock - keyring-backed secret resolution for automated builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Resolve a secret
//! │   ├── set           # Store a secret
//! │   ├── key           # Print an override lookup key
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── codec         # Identifier encoding (passthrough vs. Base64)
//!     ├── config        # .keydock.toml management
//!     ├── overrides     # Read-only override table (file or environment)
//!     ├── resolver      # Backend chain and precedence rules
//!     ├── secret        # Opaque, redacted secret value
//!     └── store/        # Native store backends
//!         ├── mod       # SecretStore trait
//!         └── keyring   # Platform keyring implementation
//! ```
//!
//! # Features
//!
//! - Secrets live in the operating system's credential facility, addressed
//!   by a raw (realm, account) pair
//! - Read-only overrides from a `key=value` file or the process environment
//!   short-circuit the keyring in CI, where interactive unlock is impossible
//! - Realms unsafe for flat keys are Base64-encoded; bare hostnames pass
//!   through readable
//! - Resolution is stateless: every call re-derives its key and re-queries
//!   its backends
//!
//! # Example
//!
//! ```no_run
//! let value = keydock::get_secret("https://registry.example", "deploy-bot")?;
//! let overwrote = keydock::set_secret("https://registry.example", "deploy-bot", "t0ken")?;
//! # Ok::<(), keydock::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::{get_secret, set_secret, Resolver, SecretValue};
pub use crate::error::{Error, Result};
