use actix_web::{web, HttpResponse, Responder};
use crate::core::SchemeAggregator;
use crate::models::{ErrorResponse, FindSchemesResponse, UserProfile};
use crate::services::SearchProvider;

/// Application state shared across all handlers
pub struct AppState<P> {
    pub aggregator: SchemeAggregator<P>,
    pub max_results_per_query: usize,
}

impl<P: SearchProvider> AppState<P> {
    pub fn new(aggregator: SchemeAggregator<P>, max_results_per_query: usize) -> Self {
        Self {
            aggregator,
            max_results_per_query,
        }
    }
}

/// Configure the scheme search route
pub fn configure<P: SearchProvider + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/find-schemes", web::post().to(find_schemes::<P>));
}

/// Find schemes endpoint
///
/// POST /find-schemes
///
/// Request body:
/// ```json
/// {
///   "age": 20,
///   "gender": "string",
///   "state": "string",
///   "income_bracket": "string",
///   "occupation": "string",
///   "category": "string"
/// }
/// ```
async fn find_schemes<P: SearchProvider + 'static>(
    state: web::Data<AppState<P>>,
    req: web::Json<UserProfile>,
) -> impl Responder {
    let profile = req.into_inner();

    tracing::info!("Finding schemes for state: {}, category: {}", profile.state, profile.category);

    let schemes = match state
        .aggregator
        .search(&profile, state.max_results_per_query)
        .await
    {
        Ok(schemes) => schemes,
        Err(e) => {
            tracing::error!("Scheme search failed for state {}: {}", profile.state, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Search provider failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    HttpResponse::Ok().json(FindSchemesResponse::new(profile.state, schemes))
}
