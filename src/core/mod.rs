// Core algorithm exports
pub mod aggregator;
pub mod domains;
pub mod queries;

pub use aggregator::{SchemeAccumulator, SchemeAggregator, DEFAULT_MAX_RESULTS_PER_QUERY};
pub use domains::{DomainFilter, DomainMatch, ALLOWED_DOMAINS};
pub use queries::{build_queries, CENTRAL_SECTOR_QUERY};
