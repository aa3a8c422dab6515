use crate::errors::WifilogError;

#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Failed to serialize connection log: {message}")]
    Serialization { message: String },

    #[error("Connection log at '{path}' is not valid JSON: {message}")]
    InvalidJson { path: String, message: String },

    #[error("IO error accessing connection log: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl WifilogError for RecordStoreError {
    fn error_code(&self) -> &'static str {
        match self {
            RecordStoreError::Serialization { .. } => "RECORD_SERIALIZATION_ERROR",
            RecordStoreError::InvalidJson { .. } => "RECORD_INVALID_JSON",
            RecordStoreError::IoError { .. } => "RECORD_IO_ERROR",
        }
    }
}
