// Route exports
pub mod schemes;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{error, http::StatusCode, middleware, web, App, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;
use crate::services::SearchProvider;

pub use schemes::AppState;

pub fn configure_routes<P: SearchProvider + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.configure(schemes::configure::<P>);
}

/// Build the application: state, JSON error handling, open CORS, request logging and routes
pub fn build_app<P: SearchProvider + 'static>(
    state: web::Data<AppState<P>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(json_config())
        .wrap(Cors::permissive())
        .wrap(middleware::Logger::default())
        .configure(configure_routes::<P>)
}

impl error::ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// JSON extractor config that answers malformed bodies with an `ErrorResponse`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[actix_web::test]
    async fn test_error_response_renders_json() {
        let err = ErrorResponse {
            error: "invalid_json".to_string(),
            message: "Invalid JSON: missing field `state`".to_string(),
            status_code: 400,
        };

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let decoded: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded.error, "invalid_json");
    }
}
