// Service exports
pub mod duckduckgo;
pub mod provider;

pub use duckduckgo::{DuckDuckGoProvider, DuckDuckGoSession};
pub use provider::{ProviderError, SearchProvider, SearchSession};
