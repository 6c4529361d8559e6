//! Store contract tests run against every backend behind the trait object.

use tempfile::TempDir;

use gradebook::store::{InMemoryStore, JsonFileStore, RecordStore, StoreError};
use gradebook::validate::GradeCandidate;

fn candidate(student_id: &str, name: &str, score: &str) -> GradeCandidate {
    GradeCandidate::new(student_id, name, "MK001", score)
}

/// Run the shared save/list contract against one backend.
fn assert_store_contract(store: &dyn RecordStore) {
    // Empty store lists successfully
    assert!(store.list().expect("empty list should succeed").is_empty());

    // Saving a valid candidate returns an id and the record lists first
    let first = store
        .save(&candidate("12345", "Ana Wijaya", "85"))
        .expect("valid save should succeed");
    let second = store
        .save(&candidate("67890", "Budi Santoso", "70"))
        .expect("valid save should succeed");
    assert_ne!(first, second, "ids are unique");

    let records = store.list().expect("list should succeed");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, second, "most recent save listed first");
    assert_eq!(records[1].id, first);

    // Invalid candidates are rejected with all violations and no write
    match store.save(&candidate("12", "Al", "150")) {
        Err(StoreError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(store.list().unwrap().len(), 2);
}

#[test]
fn test_in_memory_store_contract() {
    let store = InMemoryStore::new();
    assert_store_contract(&store);
}

#[test]
fn test_json_file_store_contract() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFileStore::new(tmp.path().join("records.json"));
    assert_store_contract(&store);
}

#[test]
fn test_backends_share_a_document_shape() {
    // A collection written by the file backend deserializes into the same
    // records the in-memory backend serves.
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("records.json");

    let file_store = JsonFileStore::new(path.clone());
    file_store
        .save(&candidate("12345", "Ana Wijaya", "85"))
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let records: Vec<gradebook::record::GradeRecord> = serde_json::from_str(&content).unwrap();

    let memory_store = InMemoryStore::with_records(records);
    let listed = memory_store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].student_name, "Ana Wijaya");
}
