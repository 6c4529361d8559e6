//! Record store abstraction over durable persistence of grade records.
//!
//! A store exposes exactly two operations: save one validated record and
//! list all records newest-first. The backing medium is swappable without
//! changing the contract; backends are explicitly constructed values handed
//! to callers rather than module-level singletons.

mod in_memory;
mod json_file;
mod remote;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;
pub use remote::RemoteStore;

use std::fmt;

use crate::id;
use crate::record::GradeRecord;
use crate::utc_now_iso;
use crate::validate::{self, GradeCandidate};

/// Errors surfaced by record stores. All three kinds are recoverable by
/// user retry; none is fatal to the process.
#[derive(Debug)]
pub enum StoreError {
    /// The candidate failed validation; nothing was written.
    Validation(Vec<String>),
    /// The append could not be committed to the backing medium.
    Write(String),
    /// The collection could not be retrieved or its stored content is
    /// malformed. Distinguishable from an empty store, which is success.
    Read(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(errors) => {
                write!(f, "Validation failed: {}", errors.join(", "))
            }
            StoreError::Write(msg) => write!(f, "Failed to save record: {}", msg),
            StoreError::Read(msg) => write!(f, "Failed to load records: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// A trait for saving and listing grade records from a storage backend.
pub trait RecordStore {
    /// Validate the candidate and append it as a new record.
    ///
    /// Returns the store-assigned id. If validation fails, returns
    /// [`StoreError::Validation`] and performs no write. The append is
    /// atomic with respect to a single caller: no partial record is ever
    /// visible to a subsequent `list`.
    fn save(&self, candidate: &GradeCandidate) -> Result<String, StoreError>;

    /// List all stored records sorted by save time, most recent first.
    ///
    /// An empty store yields `Ok` with an empty vector, not an error.
    fn list(&self) -> Result<Vec<GradeRecord>, StoreError>;
}

/// Validate a candidate and build the record to append, assigning a fresh
/// id and the current UTC timestamp.
///
/// Every backend goes through this so none can skip re-validation.
pub(crate) fn prepare_record(candidate: &GradeCandidate) -> Result<GradeRecord, StoreError> {
    let result = validate::validate(candidate);
    if !result.is_valid {
        return Err(StoreError::Validation(result.errors));
    }

    Ok(validate::into_record(
        candidate,
        id::generate_record_id(),
        utc_now_iso(),
    ))
}

/// Sort records most-recent-first by timestamp.
///
/// The input is in insertion order (oldest first). Reversing before the
/// stable sort makes ties on equal timestamps order by insertion recency,
/// so two records saved within the same second still list newest-first.
pub(crate) fn sort_newest_first(mut records: Vec<GradeRecord>) -> Vec<GradeRecord> {
    records.reverse();
    records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    records
}
