//! Campaign data port - read access to candidates and committees.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeSet;

/// Top-level record types with their own pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Candidate,
    Committee,
}

impl EntityType {
    /// Path segment in the data API.
    pub fn path(&self) -> &'static str {
        match self {
            EntityType::Candidate => "candidate",
            EntityType::Committee => "committee",
        }
    }
}

/// Request for an entity together with one of its nested collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedRequest {
    pub entity_type: EntityType,
    pub id: String,
    /// Nested collection, e.g. `committees` for a candidate.
    pub nested_type: &'static str,
    pub cycle: Option<i32>,
    /// Query parameter the nested collection filters its cycle by.
    pub cycle_key: &'static str,
    pub election_full: Option<bool>,
}

impl NestedRequest {
    pub fn new(entity_type: EntityType, id: impl Into<String>, nested_type: &'static str) -> Self {
        Self {
            entity_type,
            id: id.into(),
            nested_type,
            cycle: None,
            cycle_key: "cycle",
            election_full: None,
        }
    }

    pub fn with_cycle(mut self, cycle: Option<i32>) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn with_cycle_key(mut self, cycle_key: &'static str) -> Self {
        self.cycle_key = cycle_key;
        self
    }

    pub fn with_election_full(mut self, election_full: bool) -> Self {
        self.election_full = Some(election_full);
        self
    }
}

/// An entity record, its nested results and the cycle they were fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedFetch {
    pub entity: Value,
    pub nested: Vec<Value>,
    pub cycle: i32,
}

impl NestedFetch {
    /// Reads an array of years from the entity record, e.g. `election_years`.
    /// Missing or non-numeric entries are ignored.
    pub fn years(&self, field: &str) -> BTreeSet<i32> {
        self.entity
            .get(field)
            .and_then(Value::as_array)
            .map(|years| {
                years
                    .iter()
                    .filter_map(Value::as_i64)
                    .filter_map(|year| i32::try_from(year).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reads a string field from the entity record.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.entity.get(field).and_then(Value::as_str)
    }
}

/// Read-only port to the remote campaign finance data API.
///
/// Resolution never calls this; handlers fetch first and resolve after.
#[async_trait]
pub trait CampaignDataClient: Send + Sync {
    /// Fetches an entity and a nested collection for one cycle.
    ///
    /// When the request names no cycle, the client picks one (normally the
    /// entity's latest) and reports it in [`NestedFetch::cycle`].
    async fn fetch_with_nested(&self, request: NestedRequest) -> Result<NestedFetch, DataClientError>;
}

/// Errors that can occur while talking to the data API.
#[derive(Debug, thiserror::Error)]
pub enum DataClientError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Data API unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response from data API: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for DataClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataClientError::InvalidResponse(err.to_string())
        } else {
            DataClientError::Unavailable(err.to_string())
        }
    }
}
