use serde::{Deserialize, Serialize};
use crate::models::domain::SchemeResult;

/// Attached to every successful response
pub const DISCLAIMER: &str = "Final eligibility is determined by the concerned government department.";

/// Response for find schemes endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindSchemesResponse {
    pub query_state: String,
    pub count: usize,
    pub schemes: Vec<SchemeResult>,
    pub disclaimer: String,
}

impl FindSchemesResponse {
    pub fn new(query_state: impl Into<String>, schemes: Vec<SchemeResult>) -> Self {
        Self {
            query_state: query_state.into(),
            count: schemes.len(),
            schemes,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}
