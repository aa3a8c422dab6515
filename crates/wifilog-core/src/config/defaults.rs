//! Default implementations for configuration types.

use crate::config::types::{Config, TrackerConfig};
use std::path::PathBuf;

/// Returns the default probe interval in seconds (60).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_probe_interval_secs() -> u64 {
    60
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            network: None,
            probe_interval_secs: default_probe_interval_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wifilog_dir: resolve_wifilog_dir(),
            log_level: std::env::var("WIFILOG_LOG_LEVEL").unwrap_or("info".to_string()),
        }
    }
}

/// Resolve the data directory: `$WIFILOG_DIR` when set, otherwise
/// `~/.wifilog`, with a temp-dir fallback when no home directory exists.
fn resolve_wifilog_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WIFILOG_DIR") {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
        eprintln!("Warning: WIFILOG_DIR is set but empty, ignoring");
    }

    match dirs::home_dir() {
        Some(home) => home.join(".wifilog"),
        None => {
            eprintln!(
                "Warning: Could not find home directory. Set HOME environment variable. \
                Using fallback directory."
            );
            std::env::temp_dir().join(".wifilog")
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the JSON connection log store.
    pub fn connections_file(&self) -> PathBuf {
        self.wifilog_dir.join("connections.json")
    }

    /// Path of the user configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.wifilog_dir.join("config.toml")
    }
}
