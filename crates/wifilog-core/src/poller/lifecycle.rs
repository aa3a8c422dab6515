//! Mount/unmount wiring between a display surface and the poller.
//!
//! A view is either inactive or actively polling; there are no other
//! states. Mounting starts the poller exactly once, and repeated mounts
//! while active reuse the running poller rather than starting a second
//! timer. Unmounting tears the poller down and is safe to call in any
//! state.

use crate::records::types::ConnectionLog;
use crate::source::ConnectionSource;
use tokio::sync::watch;

use super::PollerHandle;

/// Lifecycle state of a connection log view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// Not mounted; no polling occurs.
    Inactive,
    /// Mounted; the poller is running.
    Active,
}

/// Owns the poller for one view, enforcing the two-state lifecycle.
#[derive(Default)]
pub struct ViewLifecycle {
    handle: Option<PollerHandle>,
}

impl ViewLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        if self.handle.is_some() {
            ViewState::Active
        } else {
            ViewState::Inactive
        }
    }

    /// Activate the view: start polling `source` and return a subscription
    /// to connection log updates.
    ///
    /// If the view is already active, the running poller is kept (its
    /// timer is never re-established mid-lifecycle) and a subscription to
    /// it is returned; `source` is dropped unused.
    pub fn mount<S: ConnectionSource>(&mut self, source: S) -> watch::Receiver<ConnectionLog> {
        if let Some(handle) = &self.handle {
            tracing::warn!(
                event = "core.lifecycle.mount_ignored",
                "View already active, reusing running poller"
            );
            return handle.subscribe();
        }

        let handle = super::start(source);
        let receiver = handle.subscribe();
        self.handle = Some(handle);

        tracing::info!(event = "core.lifecycle.mounted");
        receiver
    }

    /// Deactivate the view, cancelling the poll timer.
    ///
    /// Idempotent and infallible: unmounting an inactive view (including
    /// one whose mount never completed a fetch) is a no-op.
    pub fn unmount(&mut self) {
        match self.handle.take() {
            Some(handle) => {
                handle.stop();
                tracing::info!(event = "core.lifecycle.unmounted");
            }
            None => {
                tracing::debug!(
                    event = "core.lifecycle.unmount_ignored",
                    "View not active"
                );
            }
        }
    }
}
