use crate::errors::WifilogError;
use crate::records::errors::RecordStoreError;

/// The source could not produce a connection log.
///
/// Contained at the poller boundary: logged, never surfaced to the render
/// path, never fatal to the polling loop.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Connection source unavailable: {message}")]
    Unavailable { message: String },

    #[error("Connection store error: {source}")]
    Store {
        #[from]
        source: RecordStoreError,
    },
}

impl WifilogError for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            SourceError::Unavailable { .. } => "SOURCE_UNAVAILABLE",
            SourceError::Store { .. } => "SOURCE_STORE_ERROR",
        }
    }
}
