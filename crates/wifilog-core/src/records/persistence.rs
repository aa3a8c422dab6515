//! Connection log persistence
//!
//! The whole log lives in one JSON file, written atomically so a crashed
//! write can never leave a half-written store behind.

use crate::records::errors::RecordStoreError;
use crate::records::types::ConnectionLog;
use std::fs;
use std::path::Path;

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.records.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after write error"
        );
    }
}

/// Write the connection log to `path`, newest date first.
///
/// The parent directory is created if needed. The write goes to a temp
/// file first and is renamed into place.
pub fn save_records(log: &ConnectionLog, path: &Path) -> Result<(), RecordStoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut sorted = log.clone();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let json = serde_json::to_string_pretty(&sorted).map_err(|e| {
        tracing::error!(
            event = "core.records.serialization_failed",
            error = %e,
            message = "Failed to serialize connection log to JSON"
        );
        RecordStoreError::Serialization {
            message: e.to_string(),
        }
    })?;

    let temp_file = path.with_extension("json.tmp");

    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(RecordStoreError::IoError { source: e });
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(RecordStoreError::IoError { source: e });
    }

    Ok(())
}

/// Load the connection log from `path`.
///
/// A missing file is an empty log. A file that exists but does not parse
/// is an error; callers decide whether that is fatal.
pub fn load_records(path: &Path) -> Result<ConnectionLog, RecordStoreError> {
    if !path.exists() {
        return Ok(ConnectionLog::new());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| RecordStoreError::InvalidJson {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
