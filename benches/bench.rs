// Criterion benchmarks for Scheme Finder

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scheme_finder::core::{build_queries, DomainFilter, DomainMatch, SchemeAggregator};
use scheme_finder::models::{RawSearchResult, UserProfile};
use scheme_finder::services::{ProviderError, SearchProvider, SearchSession};

/// Provider answering every query with the same rows
struct RepeatingProvider {
    rows: Vec<RawSearchResult>,
}

struct RepeatingSession {
    rows: Vec<RawSearchResult>,
}

impl SearchProvider for RepeatingProvider {
    type Session = RepeatingSession;

    fn open_session(&self) -> Result<RepeatingSession, ProviderError> {
        Ok(RepeatingSession {
            rows: self.rows.clone(),
        })
    }
}

impl SearchSession for RepeatingSession {
    async fn text(
        &mut self,
        _query: &str,
        max_results: usize,
    ) -> Result<Vec<RawSearchResult>, ProviderError> {
        Ok(self.rows.iter().take(max_results).cloned().collect())
    }
}

fn create_profile() -> UserProfile {
    UserProfile {
        age: 20,
        gender: "female".to_string(),
        state: "Kerala".to_string(),
        income_bracket: "below 2.5 lakh".to_string(),
        occupation: "student".to_string(),
        category: "OBC".to_string(),
    }
}

fn create_rows(count: usize) -> Vec<RawSearchResult> {
    (0..count)
        .map(|i| {
            let href = if i % 3 == 0 {
                format!("https://example.com/{}", i)
            } else {
                format!("https://scholarships.gov.in/scheme/{}", i)
            };
            RawSearchResult::new(format!("Scheme {}", i), href, "snippet")
        })
        .collect()
}

fn bench_build_queries(c: &mut Criterion) {
    let profile = create_profile();

    c.bench_function("build_queries", |b| {
        b.iter(|| build_queries(black_box(&profile)));
    });
}

fn bench_domain_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("domain_filter");

    for mode in [DomainMatch::Substring, DomainMatch::HostSuffix] {
        let filter = DomainFilter::new(mode);
        group.bench_with_input(BenchmarkId::from_parameter(format!("{:?}", mode)), &filter, |b, filter| {
            b.iter(|| filter.allows(black_box("https://dcescholarship.kerala.gov.in/apply?id=42")));
        });
    }

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let profile = create_profile();

    let mut group = c.benchmark_group("aggregation");

    for size in [10, 50, 200] {
        let aggregator = SchemeAggregator::new(
            RepeatingProvider { rows: create_rows(size) },
            DomainFilter::default(),
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| runtime.block_on(aggregator.search(black_box(&profile), size)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_queries, bench_domain_filter, bench_aggregation);
criterion_main!(benches);
