use serde::{Deserialize, Serialize};

/// One day's connection summary: the first and last time the machine was
/// observed on the tracked network.
///
/// `date` is a `%Y-%m-%d` calendar date; `earliest` and `latest` are
/// `%H:%M` time-of-day labels. The display path treats all three as
/// opaque strings and does not enforce ordering between `earliest` and
/// `latest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub date: String,
    pub earliest: String,
    pub latest: String,
}

impl ConnectionRecord {
    /// A record for a date seen for the first time at `time`.
    pub fn first_seen(date: impl Into<String>, time: impl Into<String>) -> Self {
        let time = time.into();
        Self {
            date: date.into(),
            earliest: time.clone(),
            latest: time,
        }
    }
}

/// The in-memory connection log currently being displayed or persisted.
///
/// Replaced wholesale on every successful fetch; never merged in place by
/// the display path.
pub type ConnectionLog = Vec<ConnectionRecord>;
