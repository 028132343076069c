#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Layered TOML configuration for the vigil hook.
//!
//! A single [`Config`] carries every tunable the hook has: where the
//! approval front end lives and how to start it, the paraphrase endpoint,
//! and the context-enrichment bounds. Values come from an embedded
//! `defaults.toml` overlaid by `~/.vigil/config.toml` (or
//! `$VIGIL_HOME/config.toml`).

/// Configuration error types.
pub mod error;
/// Config file discovery and layered loading.
pub mod loader;
/// TOML deep-merge.
pub mod merge;
/// Configuration struct definitions.
pub mod types;

pub use error::{ConfigError, ConfigResult};
pub use types::{ApproverSection, Config, ContextSection, SummarizerSection};

impl Config {
    /// Load configuration with the default discovery chain.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present user config file is
    /// malformed or unreadable.
    pub fn load() -> ConfigResult<Self> {
        loader::load(None)
    }

    /// Load configuration reading the user file from an explicit
    /// directory instead of `~/.vigil`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a present user config file is
    /// malformed or unreadable.
    pub fn load_from(dir: &std::path::Path) -> ConfigResult<Self> {
        loader::load(Some(dir))
    }
}
