//! Configuration type definitions.
//!
//! These types are serialized/deserialized from the TOML config file,
//! except [`Config`] which is derived from the environment at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration.
///
/// This struct holds paths and settings that are derived from environment
/// variables and system defaults, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for all wifilog data (default: ~/.wifilog)
    pub wifilog_dir: PathBuf,
    /// Log level for the application
    pub log_level: String,
}

/// User configuration loaded from `~/.wifilog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WifilogConfig {
    /// Connection tracker configuration
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// Connection tracker configuration.
///
/// Controls which WiFi network is recorded and how often the tracker
/// probes for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// SSID of the network whose presence is recorded. Probes for other
    /// networks are ignored. When unset, every associated network counts.
    #[serde(default)]
    pub network: Option<String>,

    /// Seconds between connectivity probes.
    /// Default: 60 seconds.
    #[serde(default = "super::defaults::default_probe_interval_secs")]
    pub probe_interval_secs: u64,
}
