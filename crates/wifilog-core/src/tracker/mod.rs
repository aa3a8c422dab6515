//! WiFi presence tracking.
//!
//! Each probe checks which network the machine is on and, when it matches
//! the tracked network, folds the current wall-clock time into that day's
//! record: the first observation of a date sets both bounds, later ones
//! only widen them.

pub mod errors;
pub mod ssid;

use crate::records::persistence::{load_records, save_records};
use crate::records::types::{ConnectionLog, ConnectionRecord};
use chrono::Local;
use std::path::Path;

pub use errors::TrackerError;

/// What a single probe found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// On the tracked network; the observation was recorded.
    Recorded { date: String, time: String },
    /// No WiFi association detected.
    NotConnected,
    /// Associated, but with a network other than the tracked one.
    OtherNetwork { ssid: String },
}

/// Fold one observation into the log.
///
/// Invariant: `%H:%M` strings compare lexicographically in chronological
/// order, so plain string comparison picks the earliest/latest bound.
pub fn observe(log: &mut ConnectionLog, date: &str, time: &str) {
    match log.iter_mut().find(|record| record.date == date) {
        Some(record) => {
            if time < record.earliest.as_str() {
                record.earliest = time.to_string();
            }
            if time > record.latest.as_str() {
                record.latest = time.to_string();
            }
        }
        None => log.push(ConnectionRecord::first_seen(date, time)),
    }
}

/// Load the store, fold in one observation, and persist the result.
pub fn record_observation(
    store_path: &Path,
    date: &str,
    time: &str,
) -> Result<(), TrackerError> {
    let mut log = load_records(store_path)?;
    observe(&mut log, date, time);
    save_records(&log, store_path)?;

    tracing::info!(
        event = "core.tracker.observation_recorded",
        date,
        time,
        total_days = log.len()
    );
    Ok(())
}

/// Run one probe against the store at `store_path`.
///
/// `target_network` of `None` records presence on any associated network.
/// Probe failures (no association, wrong network) are outcomes, not
/// errors; only a store failure is an error.
pub fn record_probe(
    target_network: Option<&str>,
    store_path: &Path,
) -> Result<ProbeOutcome, TrackerError> {
    let Some(ssid) = ssid::current_ssid() else {
        tracing::debug!(event = "core.tracker.probe_not_connected");
        return Ok(ProbeOutcome::NotConnected);
    };

    if let Some(target) = target_network {
        if ssid != target {
            tracing::debug!(
                event = "core.tracker.probe_other_network",
                ssid = %ssid,
                target = %target
            );
            return Ok(ProbeOutcome::OtherNetwork { ssid });
        }
    }

    let now = Local::now();
    let date = now.format("%Y-%m-%d").to_string();
    let time = now.format("%H:%M").to_string();
    record_observation(store_path, &date, &time)?;

    Ok(ProbeOutcome::Recorded { date, time })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_new_date_sets_both_bounds() {
        let mut log = ConnectionLog::new();
        observe(&mut log, "2024-03-05", "08:15");

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].earliest, "08:15");
        assert_eq!(log[0].latest, "08:15");
    }

    #[test]
    fn test_observe_later_time_widens_latest() {
        let mut log = ConnectionLog::new();
        observe(&mut log, "2024-03-05", "08:15");
        observe(&mut log, "2024-03-05", "17:42");

        assert_eq!(log.len(), 1);
        assert_eq!(log[0].earliest, "08:15");
        assert_eq!(log[0].latest, "17:42");
    }

    #[test]
    fn test_observe_earlier_time_widens_earliest() {
        let mut log = ConnectionLog::new();
        observe(&mut log, "2024-03-05", "09:30");
        observe(&mut log, "2024-03-05", "07:55");

        assert_eq!(log[0].earliest, "07:55");
        assert_eq!(log[0].latest, "09:30");
    }

    #[test]
    fn test_observe_between_bounds_is_noop() {
        let mut log = ConnectionLog::new();
        observe(&mut log, "2024-03-05", "08:00");
        observe(&mut log, "2024-03-05", "18:00");
        observe(&mut log, "2024-03-05", "12:34");

        assert_eq!(log[0].earliest, "08:00");
        assert_eq!(log[0].latest, "18:00");
    }

    #[test]
    fn test_observe_separate_dates_get_separate_records() {
        let mut log = ConnectionLog::new();
        observe(&mut log, "2024-03-05", "08:15");
        observe(&mut log, "2024-03-06", "09:02");

        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_record_observation_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("connections.json");

        record_observation(&path, "2024-03-05", "08:15").unwrap();
        record_observation(&path, "2024-03-05", "17:42").unwrap();
        record_observation(&path, "2024-03-06", "09:02").unwrap();

        let log = load_records(&path).unwrap();
        assert_eq!(log.len(), 2);
        // Store is kept newest date first
        assert_eq!(log[0].date, "2024-03-06");
        assert_eq!(log[1].date, "2024-03-05");
        assert_eq!(log[1].earliest, "08:15");
        assert_eq!(log[1].latest, "17:42");
    }

    #[test]
    fn test_record_observation_corrupt_store_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("connections.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = record_observation(&path, "2024-03-05", "08:15");
        assert!(matches!(result, Err(TrackerError::Store { .. })));
    }
}
