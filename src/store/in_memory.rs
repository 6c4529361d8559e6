//! In-memory record store for tests and ephemeral use.

use std::sync::Mutex;

use crate::record::GradeRecord;
use crate::validate::GradeCandidate;

use super::{prepare_record, sort_newest_first, RecordStore, StoreError};

/// In-memory implementation of [`RecordStore`].
///
/// State lives behind a `Mutex` so the store can append through `&self`
/// like every other backend.
pub struct InMemoryStore {
    records: Mutex<Vec<GradeRecord>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create a new empty InMemoryStore.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Create a new InMemoryStore with pre-populated records.
    pub fn with_records(records: Vec<GradeRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl RecordStore for InMemoryStore {
    fn save(&self, candidate: &GradeCandidate) -> Result<String, StoreError> {
        let record = prepare_record(candidate)?;
        let id = record.id.clone();

        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::Write("record collection lock poisoned".to_string()))?;
        records.push(record);

        Ok(id)
    }

    fn list(&self) -> Result<Vec<GradeRecord>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::Read("record collection lock poisoned".to_string()))?;
        Ok(sort_newest_first(records.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_empty_store_is_success() {
        let store = InMemoryStore::new();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_list_first_element_is_saved_record() {
        let store = InMemoryStore::new();
        let candidate = GradeCandidate::new("12345", "Ana Wijaya", "MK001", "85");

        let id = store.save(&candidate).unwrap();
        let records = store.list().unwrap();
        assert_eq!(records[0].id, id);
    }

    #[test]
    fn test_invalid_candidate_rejected_without_write() {
        let store = InMemoryStore::new();
        let bad = GradeCandidate::new("", "", "", "");

        assert!(matches!(
            store.save(&bad),
            Err(StoreError::Validation(_))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_with_records_lists_prepopulated_newest_first() {
        let older = GradeRecord {
            id: "a".to_string(),
            student_id: "11111".to_string(),
            student_name: "Budi".to_string(),
            course_code: "MK002".to_string(),
            score: 60.0,
            recorded_at: "2026-08-26T10:00:00Z".to_string(),
        };
        let newer = GradeRecord {
            recorded_at: "2026-08-27T10:00:00Z".to_string(),
            id: "b".to_string(),
            ..older.clone()
        };

        let store = InMemoryStore::with_records(vec![older, newer]);
        let records = store.list().unwrap();
        assert_eq!(records[0].id, "b");
        assert_eq!(records[1].id, "a");
    }
}
