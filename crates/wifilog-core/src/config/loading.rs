//! Configuration file loading and validation.

use crate::config::types::WifilogConfig;
use crate::errors::ConfigError;
use std::path::Path;

/// Load the user config file at `path`.
///
/// A missing file is not an error; defaults apply. A file that exists but
/// cannot be read or parsed is an error so misconfiguration does not
/// silently degrade to defaults.
pub fn load_user_config(path: &Path) -> Result<WifilogConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(
            event = "core.config.file_missing",
            path = %path.display(),
            "No config file found, using defaults"
        );
        return Ok(WifilogConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: WifilogConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;

    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.loaded",
        path = %path.display(),
        network = ?config.tracker.network,
        probe_interval_secs = config.tracker.probe_interval_secs
    );

    Ok(config)
}

/// Validate semantic constraints that serde cannot express.
pub fn validate_config(config: &WifilogConfig) -> Result<(), ConfigError> {
    if config.tracker.probe_interval_secs == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "tracker.probe_interval_secs must be at least 1".to_string(),
        });
    }

    if let Some(network) = &config.tracker.network {
        if network.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "tracker.network must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
