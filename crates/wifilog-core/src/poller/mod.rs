//! Background polling of the connection source.
//!
//! One task owns the refresh cadence: it fetches immediately on start,
//! then once per [`POLL_INTERVAL`], publishing each successful snapshot
//! wholesale through a watch channel. A failed fetch is logged and leaves
//! the previously published log untouched; the next tick proceeds on
//! schedule. There is no backoff and no retry cap.

pub mod lifecycle;

use crate::records::types::ConnectionLog;
use crate::source::ConnectionSource;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Refresh interval for the connection log display (30 seconds).
///
/// Not configurable through any external interface.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Owned handle to a running poller.
///
/// The poll timer lives exactly as long as this handle: [`stop`] or drop
/// cancels the task at its current await point, so a fetch in flight at
/// teardown can never publish into state afterwards.
///
/// [`stop`]: PollerHandle::stop
pub struct PollerHandle {
    task: JoinHandle<()>,
    receiver: watch::Receiver<ConnectionLog>,
}

impl PollerHandle {
    /// Subscribe to connection log updates.
    ///
    /// The receiver starts at the latest published value (initially the
    /// empty log) and is notified on every successful fetch.
    pub fn subscribe(&self) -> watch::Receiver<ConnectionLog> {
        self.receiver.clone()
    }

    /// Snapshot of the most recently published log.
    pub fn current(&self) -> ConnectionLog {
        self.receiver.borrow().clone()
    }

    /// Cancel the poll timer. No fetch attempt occurs after this returns.
    ///
    /// Safe to call any number of times, including when the poller never
    /// got to run.
    pub fn stop(&self) {
        self.task.abort();
    }

    /// Whether the polling task has terminated.
    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start polling `source` at [`POLL_INTERVAL`].
///
/// Must be called from within a tokio runtime.
pub fn start<S: ConnectionSource>(source: S) -> PollerHandle {
    start_with_interval(source, POLL_INTERVAL)
}

/// Start polling with an explicit interval. Exposed for callers that need
/// a different cadence under test.
pub fn start_with_interval<S: ConnectionSource>(source: S, interval: Duration) -> PollerHandle {
    let (sender, receiver) = watch::channel(ConnectionLog::new());

    let task = tokio::spawn(async move {
        // Delayed (not bursted) missed ticks keep fetches from ever
        // overlapping, even when a fetch outlasts the interval.
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            // The first tick completes immediately, so the initial fetch
            // happens on start rather than one interval later.
            ticker.tick().await;

            match source.fetch().await {
                Ok(log) => {
                    tracing::info!(
                        event = "core.poller.fetch_succeeded",
                        record_count = log.len()
                    );
                    if sender.send(log).is_err() {
                        // Every subscriber is gone; nothing left to update.
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(
                        event = "core.poller.fetch_failed",
                        error = %e,
                        "Fetch failed, keeping previously published log"
                    );
                }
            }
        }
    });

    PollerHandle { task, receiver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::types::ConnectionRecord;
    use crate::source::SourceError;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Source that replays a script of responses, then keeps returning a
    /// fallback. Counts every fetch attempt.
    struct ScriptedSource {
        calls: Arc<AtomicUsize>,
        script: Mutex<VecDeque<Result<ConnectionLog, SourceError>>>,
        fallback: ConnectionLog,
    }

    impl ScriptedSource {
        fn new(
            script: Vec<Result<ConnectionLog, SourceError>>,
        ) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let source = Self {
                calls: calls.clone(),
                script: Mutex::new(script.into()),
                fallback: ConnectionLog::new(),
            };
            (source, calls)
        }
    }

    impl ConnectionSource for ScriptedSource {
        async fn fetch(&self) -> Result<ConnectionLog, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self.script.lock().unwrap().pop_front();
            next.unwrap_or_else(|| Ok(self.fallback.clone()))
        }
    }

    fn record(date: &str) -> ConnectionRecord {
        ConnectionRecord {
            date: date.to_string(),
            earliest: "08:15".to_string(),
            latest: "17:42".to_string(),
        }
    }

    fn unavailable() -> SourceError {
        SourceError::Unavailable {
            message: "backend offline".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_fetch_is_immediate() {
        let (source, calls) = ScriptedSource::new(vec![Ok(vec![record("2024-03-05")])]);
        let handle = start(source);

        tokio::time::sleep(Duration::from_millis(1)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(handle.current(), vec![record("2024-03-05")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_replaces_log_wholesale() {
        let (source, _) = ScriptedSource::new(vec![
            Ok(vec![record("2024-03-04"), record("2024-03-05")]),
            Ok(vec![record("2024-03-06")]),
        ]);
        let handle = start(source);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(handle.current().len(), 2);

        tokio::time::sleep(Duration::from_secs(31)).await;
        // The second snapshot replaces the first entirely, no merge
        assert_eq!(handle.current(), vec![record("2024-03-06")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_fetch_preserves_state() {
        let (source, calls) = ScriptedSource::new(vec![
            Ok(vec![record("2024-03-05")]),
            Err(unavailable()),
            Ok(vec![record("2024-03-06")]),
        ]);
        let handle = start(source);
        let mut rx = handle.subscribe();

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![record("2024-03-05")]);

        // Failed tick: attempted, state untouched, no notification
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!rx.has_changed().unwrap());
        assert_eq!(handle.current(), vec![record("2024-03-05")]);

        // Next tick recovers on schedule
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(handle.current(), vec![record("2024-03-06")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_survives_repeated_failures() {
        let (source, calls) = ScriptedSource::new(vec![
            Err(unavailable()),
            Err(unavailable()),
            Err(unavailable()),
        ]);
        let handle = start(source);

        tokio::time::sleep(Duration::from_millis(1)).await;
        tokio::time::sleep(Duration::from_secs(31)).await;
        tokio::time::sleep(Duration::from_secs(31)).await;

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(!handle.is_stopped());
        assert!(handle.current().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_future_fetches() {
        let (source, calls) = ScriptedSource::new(vec![Ok(vec![record("2024-03-05")])]);
        let handle = start(source);

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.stop();

        // Several intervals elapse after teardown; no further fetch occurs
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handle.is_stopped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_first_fetch() {
        let (source, calls) = ScriptedSource::new(vec![Ok(vec![record("2024-03-05")])]);
        let handle = start(source);

        // Torn down before the task ever ran
        handle.stop();

        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_idempotent() {
        let (source, _) = ScriptedSource::new(vec![]);
        let handle = start(source);

        handle.stop();
        handle.stop();
        drop(handle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_to_one_record_is_single_transition() {
        let (source, _) = ScriptedSource::new(vec![Ok(vec![record("2024-03-05")])]);
        let handle = start(source);
        let mut rx = handle.subscribe();

        assert!(rx.borrow().is_empty());

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().len(), 1);
        // Exactly one notification for the first payload
        assert!(!rx.has_changed().unwrap());
    }
}
