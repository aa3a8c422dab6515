use crate::errors::WifilogError;
use crate::records::errors::RecordStoreError;

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Failed to update connection store: {source}")]
    Store {
        #[from]
        source: RecordStoreError,
    },
}

impl WifilogError for TrackerError {
    fn error_code(&self) -> &'static str {
        match self {
            TrackerError::Store { .. } => "TRACKER_STORE_ERROR",
        }
    }
}
