//! # Gradebook - Student Grade Records
//!
//! Gradebook records one grade entry per student/course submission and lists
//! all entries newest-first, with client-side validation and pluggable
//! storage backends.
//!
//! ## Overview
//!
//! Candidate records arrive as raw form-field strings, pass through a pure
//! validator that collects every rule violation, and are appended to an
//! append-only record store. The backing store is swappable (local JSON
//! file, in-memory, or a remote document collection) without changing the
//! save/list contract.
//!
//! ## Core Concepts
//!
//! - **Candidates**: Raw user input, validated before anything is written
//! - **Records**: Immutable grade entries with a store-assigned id and timestamp
//! - **Stores**: Pluggable persistence backends behind a single trait
//!
//! ## Modules
//!
//! - [`record`] - The `GradeRecord` entity and course catalog
//! - [`validate`] - Pure input validation with collected errors
//! - [`store`] - Record store trait and backends (file, memory, remote)
//! - [`config`] - Configuration management for gradebook projects
//! - [`id`] - Collision-resistant record id generation
//!
//! ## Example
//!
//! ```no_run
//! use gradebook::store::{JsonFileStore, RecordStore};
//! use gradebook::validate::GradeCandidate;
//!
//! let store = JsonFileStore::new(".gradebook/records.json".into());
//!
//! let candidate = GradeCandidate {
//!     student_id: "12345".to_string(),
//!     student_name: "Ana Wijaya".to_string(),
//!     course_code: "MK001".to_string(),
//!     score: "85".to_string(),
//! };
//!
//! let id = store.save(&candidate).expect("save failed");
//! let records = store.list().expect("list failed");
//! assert_eq!(records[0].id, id);
//! ```

// Re-export all public modules
pub mod cli;
pub mod config;
pub mod formatters;
pub mod id;
pub mod record;
pub mod store;
pub mod ui;
pub mod validate;

/// Default path constants for the gradebook directory structure.
pub mod paths {
    /// Directory containing gradebook state: `.gradebook`
    pub const GRADEBOOK_DIR: &str = ".gradebook";
    /// Project configuration file: `.gradebook/config.md`
    pub const CONFIG_FILE: &str = ".gradebook/config.md";
    /// Default record collection for the local backend: `.gradebook/records.json`
    pub const RECORDS_FILE: &str = ".gradebook/records.json";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in UTC,
/// not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
