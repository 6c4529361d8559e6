//! Remote record store over HTTP.
//!
//! Talks to a document-collection service exposing `POST /records` to
//! append one document and `GET /records` to fetch the whole collection.
//! Documents use the same stored shape as the local backend, so the two
//! are interchangeable behind [`RecordStore`].

use ureq::Agent;

use crate::record::GradeRecord;
use crate::validate::GradeCandidate;

use super::{prepare_record, sort_newest_first, RecordStore, StoreError};

/// Remote document-collection backend.
pub struct RemoteStore {
    endpoint: String,
    agent: Agent,
}

impl RemoteStore {
    /// Create a RemoteStore for the given base endpoint URL.
    ///
    /// Returns an error for endpoints without an http/https scheme.
    pub fn new(endpoint: &str) -> Result<Self, StoreError> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(StoreError::Write(format!(
                "Invalid endpoint URL: {}",
                endpoint
            )));
        }

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            agent: Agent::new(),
        })
    }

    fn records_url(&self) -> String {
        format!("{}/records", self.endpoint)
    }
}

impl RecordStore for RemoteStore {
    fn save(&self, candidate: &GradeCandidate) -> Result<String, StoreError> {
        let record = prepare_record(candidate)?;
        let id = record.id.clone();

        let response = self
            .agent
            .post(&self.records_url())
            .set("Content-Type", "application/json")
            .send_json(&record)
            .map_err(|e| StoreError::Write(format!("HTTP request failed: {}", e)))?;

        if response.status() != 200 && response.status() != 201 {
            return Err(StoreError::Write(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        Ok(id)
    }

    fn list(&self) -> Result<Vec<GradeRecord>, StoreError> {
        let response = self
            .agent
            .get(&self.records_url())
            .call()
            .map_err(|e| StoreError::Read(format!("HTTP request failed: {}", e)))?;

        if response.status() != 200 {
            return Err(StoreError::Read(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let records: Vec<GradeRecord> = response
            .into_json()
            .map_err(|e| StoreError::Read(format!("malformed collection in response: {}", e)))?;

        Ok(sort_newest_first(records))
    }
}
