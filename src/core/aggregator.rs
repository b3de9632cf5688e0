use std::collections::HashSet;

use crate::core::domains::DomainFilter;
use crate::core::queries::build_queries;
use crate::models::{RawSearchResult, SchemeResult, UserProfile};
use crate::services::{ProviderError, SearchProvider, SearchSession};

pub const DEFAULT_MAX_RESULTS_PER_QUERY: usize = 10;

/// Insertion-ordered collection of results keyed by URL
///
/// The first result seen for a URL is kept; later ones are ignored.
#[derive(Debug, Default)]
pub struct SchemeAccumulator {
    seen: HashSet<String>,
    results: Vec<SchemeResult>,
}

impl SchemeAccumulator {
    /// Insert a result unless its URL is already present
    ///
    /// Returns `true` if the result was inserted.
    pub fn insert_if_absent(&mut self, result: SchemeResult) -> bool {
        if self.seen.contains(&result.url) {
            return false;
        }

        self.seen.insert(result.url.clone());
        self.results.push(result);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.results.len()
    }

    pub fn into_results(self) -> Vec<SchemeResult> {
        self.results
    }
}

/// Runs the profile queries against a search provider and collects
/// allow-listed, deduplicated scheme pages
///
/// # Pipeline
/// 1. Build the fixed queries for the profile
/// 2. Query the provider for each, in order, through one session
/// 3. Drop rows with no URL or a URL outside the allow-list
/// 4. Keep the first row per URL
pub struct SchemeAggregator<P> {
    provider: P,
    filter: DomainFilter,
}

impl<P: SearchProvider> SchemeAggregator<P> {
    pub fn new(provider: P, filter: DomainFilter) -> Self {
        Self { provider, filter }
    }

    /// Search for schemes matching a profile
    ///
    /// Queries run sequentially. Any provider error aborts the run and no
    /// partial results are returned; the session is released either way.
    pub async fn search(
        &self,
        profile: &UserProfile,
        max_results_per_query: usize,
    ) -> Result<Vec<SchemeResult>, ProviderError> {
        let queries = build_queries(profile);
        let mut session = self.provider.open_session()?;
        let mut accumulator = SchemeAccumulator::default();

        for query in &queries {
            let rows = session.text(query, max_results_per_query).await?;
            let returned = rows.len();
            let before = accumulator.len();

            for row in rows {
                if let Some(result) = self.accept(row, query) {
                    accumulator.insert_if_absent(result);
                }
            }

            tracing::debug!(
                "Query '{}' returned {} rows, {} new schemes",
                query,
                returned,
                accumulator.len() - before
            );
        }

        drop(session);

        tracing::info!(
            "Found {} schemes for state {} across {} queries",
            accumulator.len(),
            profile.state,
            queries.len()
        );

        Ok(accumulator.into_results())
    }

    fn accept(&self, row: RawSearchResult, query: &str) -> Option<SchemeResult> {
        if row.href.is_empty() {
            return None;
        }

        if !self.filter.allows(&row.href) {
            tracing::trace!("Skipping result outside allow-list: {}", row.href);
            return None;
        }

        Some(SchemeResult {
            title: row.title,
            url: row.href,
            snippet: row.body,
            source_query: query.to_string(),
        })
    }
}
