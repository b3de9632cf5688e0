use crate::models::RawSearchResult;
use std::future::Future;
use thiserror::Error;

/// Errors that can occur when talking to the search provider
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Rate limited by search provider: {0}")]
    RateLimited(String),

    #[error("Search provider returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// An external web search engine
///
/// Searches run inside a session. One aggregation run opens exactly one
/// session, issues all of its queries through it, and drops it when done.
/// Implementations release session resources in `Drop`, so the session is
/// closed on every exit path including provider errors.
pub trait SearchProvider: Send + Sync {
    type Session: SearchSession;

    /// Acquire a session for one aggregation run
    fn open_session(&self) -> Result<Self::Session, ProviderError>;
}

/// A live connection to the search provider
pub trait SearchSession: Send {
    /// Run a text search and return up to `max_results` records in provider order
    fn text(
        &mut self,
        query: &str,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<RawSearchResult>, ProviderError>> + Send;
}
