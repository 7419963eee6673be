//! Query-string DTOs and the error body for page endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::election::ALL_RESULT_TYPES;

/// Query parameters for `/candidate/:candidate_id/`.
#[derive(Debug, Deserialize)]
pub struct CandidatePageParams {
    pub cycle: Option<i32>,
    /// Whole election period rather than one two-year cycle.
    #[serde(default = "default_election_full")]
    pub election_full: bool,
}

/// Query parameters for `/committee/:committee_id/`.
#[derive(Debug, Deserialize)]
pub struct CommitteePageParams {
    pub cycle: Option<i32>,
}

/// Query parameters for `/elections/` and `/election-page/`.
#[derive(Debug, Default, Deserialize)]
pub struct ElectionLookupParams {
    pub state: Option<String>,
    pub district: Option<String>,
}

/// Query parameters for `/legal/search/`.
#[derive(Debug, Deserialize)]
pub struct LegalSearchParams {
    pub search: Option<String>,
    #[serde(default = "default_search_type")]
    pub search_type: String,
}

/// Query parameters for `/legal/search/:doc_type/`.
#[derive(Debug, Deserialize)]
pub struct LegalDocSearchParams {
    pub search: Option<String>,
}

/// Query parameters for `/`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Query parameters for `/raising/` and `/spending/`.
#[derive(Debug, Deserialize)]
pub struct BreakdownParams {
    /// `P`, `S`, `H`, `pac` or `party`.
    pub top_category: Option<String>,
    pub cycle: Option<i32>,
}

fn default_election_full() -> bool {
    true
}

fn default_search_type() -> String {
    ALL_RESULT_TYPES.to_string()
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_GATEWAY".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
