//! The fetch boundary between the display pipeline and whatever supplies
//! connection records.

use crate::records::types::ConnectionLog;
use std::future::Future;

pub mod errors;
pub mod file;

pub use errors::SourceError;
pub use file::FileSource;

/// Capability to fetch the full connection log.
///
/// Decouples the poller from the backing store. The call takes no
/// parameters and returns the whole log; there is no pagination or
/// filtering at this boundary. Failures are opaque to the caller.
///
/// # Semantics
///
/// - **Replacement**: the returned log is a complete snapshot. Consumers
///   replace prior state wholesale rather than merging.
/// - **Ordering**: whatever order the source returns is preserved
///   downstream.
pub trait ConnectionSource: Send + 'static {
    fn fetch(&self) -> impl Future<Output = Result<ConnectionLog, SourceError>> + Send;
}
