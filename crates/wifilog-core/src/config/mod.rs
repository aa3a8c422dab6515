//! # Configuration System
//!
//! Two layers of configuration:
//!
//! 1. **Runtime [`Config`]** - paths and settings derived from environment
//!    variables and system defaults (data directory, log level).
//! 2. **[`WifilogConfig`]** - user preferences loaded from
//!    `~/.wifilog/config.toml` (target network, probe cadence).
//!
//! ```toml
//! # ~/.wifilog/config.toml
//! [tracker]
//! network = "VM5CAC70"
//! probe_interval_secs = 60
//! ```
//!
//! The display refresh cadence is intentionally not configurable; see
//! [`crate::poller::POLL_INTERVAL`].

pub mod defaults;
pub mod loading;
pub mod types;

// Public API exports
pub use types::{Config, TrackerConfig, WifilogConfig};

// Delegation so callers don't need to import the loading module
impl WifilogConfig {
    /// Load the user configuration file, falling back to defaults when the
    /// file does not exist.
    ///
    /// See [`loading::load_user_config`] for details.
    pub fn load(config: &Config) -> Result<Self, crate::errors::ConfigError> {
        loading::load_user_config(&config.config_file())
    }

    /// Validate the configuration.
    ///
    /// See [`loading::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        loading::validate_config(self)
    }
}
