//! File-backed connection source.
//!
//! Reads the JSON store maintained by the tracker. This is the deployed
//! bridge between `wifilog track` (writer) and `wifilog watch` (reader).

use crate::records::persistence::load_records;
use crate::records::types::ConnectionLog;
use crate::source::errors::SourceError;
use crate::source::ConnectionSource;
use std::path::PathBuf;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConnectionSource for FileSource {
    /// A missing store file is an empty log, not a failure; the tracker
    /// may simply not have recorded anything yet.
    async fn fetch(&self) -> Result<ConnectionLog, SourceError> {
        let log = load_records(&self.path)?;
        Ok(log)
    }
}
