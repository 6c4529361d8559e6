//! File-backed record store: one JSON array on local disk.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::record::GradeRecord;
use crate::validate::GradeCandidate;

use super::{prepare_record, sort_newest_first, RecordStore, StoreError};

/// Durable local backend storing the whole collection as a JSON array.
///
/// A missing file reads as an empty collection; malformed content is a
/// [`StoreError::Read`]. Appends rewrite the collection through a temp file
/// in the same directory followed by an atomic rename, so a subsequent
/// `list` never observes a partial record.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a new JsonFileStore backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the stored collection in insertion order.
    fn load_collection(&self) -> Result<Vec<GradeRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Read(format!("{}: {}", self.path.display(), e)))?;

        serde_json::from_str(&content).map_err(|e| {
            StoreError::Read(format!(
                "stored collection at {} is malformed: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Replace the stored collection atomically.
    fn write_collection(&self, records: &[GradeRecord]) -> Result<(), StoreError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir)
                .map_err(|e| StoreError::Write(format!("{}: {}", dir.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        // Temp file must live in the same directory for the rename to be atomic.
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(std::path::Path::new(".")))
            .map_err(|e| StoreError::Write(e.to_string()))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| StoreError::Write(e.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;

        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn save(&self, candidate: &GradeCandidate) -> Result<String, StoreError> {
        let record = prepare_record(candidate)?;
        let id = record.id.clone();

        let mut records = self.load_collection()?;
        records.push(record);
        self.write_collection(&records)?;

        Ok(id)
    }

    fn list(&self) -> Result<Vec<GradeRecord>, StoreError> {
        Ok(sort_newest_first(self.load_collection()?))
    }
}
