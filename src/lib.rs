//! Scheme Finder - government scheme discovery service
//!
//! Turns a user's demographic profile into a few focused web searches and
//! returns the result pages that live on official government domains,
//! deduplicated by URL.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_queries, DomainFilter, DomainMatch, SchemeAggregator, ALLOWED_DOMAINS};
pub use models::{UserProfile, SchemeResult, RawSearchResult, FindSchemesResponse};
pub use services::{DuckDuckGoProvider, ProviderError, SearchProvider, SearchSession};
