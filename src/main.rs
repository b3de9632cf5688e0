use actix_web::{web, HttpServer};
use scheme_finder::config::{LoggingSettings, Settings};
use scheme_finder::core::{DomainFilter, SchemeAggregator};
use scheme_finder::routes::{self, AppState};
use scheme_finder::services::DuckDuckGoProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_tracing(&settings.logging);

    info!("Starting scheme finder service...");

    let provider = DuckDuckGoProvider::from_settings(&settings.search);
    let filter = DomainFilter::new(settings.filter.domain_match);

    info!(
        "Search provider: {} (max {} results per query, domain match: {:?})",
        provider.endpoint(),
        settings.search.max_results_per_query,
        filter.mode()
    );

    let app_state = web::Data::new(AppState::new(
        SchemeAggregator::new(provider, filter),
        settings.search.max_results_per_query,
    ));

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || routes::build_app(app_state.clone()));

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
