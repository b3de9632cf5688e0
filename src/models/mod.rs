// Model exports
pub mod domain;
pub mod responses;

pub use domain::{UserProfile, SchemeResult, RawSearchResult};
pub use responses::{FindSchemesResponse, ErrorResponse, DISCLAIMER};
