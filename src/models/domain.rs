use serde::{Deserialize, Serialize};

/// Demographic profile submitted by the user
///
/// Only `state` and `category` feed the search queries; the remaining
/// fields are accepted so clients can send the full profile. Fields are
/// type-checked on deserialization and otherwise taken as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: i64,
    pub gender: String,
    pub state: String,
    pub income_bracket: String,
    pub occupation: String,
    pub category: String,
}

/// A scheme page discovered by one aggregation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// The query that first surfaced this URL
    pub source_query: String,
}

/// One record as returned by the search provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub body: String,
}

impl RawSearchResult {
    pub fn new(title: impl Into<String>, href: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            body: body.into(),
        }
    }
}
