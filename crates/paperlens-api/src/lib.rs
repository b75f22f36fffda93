//! PaperLens API - REST server and web UI
//!
//! Serves the upload page, the paper analysis endpoint and the usual
//! health/readiness/metrics probes. OpenAPI docs are generated with utoipa
//! and served through Swagger UI.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Headroom above the file-size limit so multipart framing does not trip
/// the transport body cap before the handler can reject the file with 413
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::papers::analyze_paper,
    ),
    components(schemas(
        error::ApiError,
        handlers::health::HealthResponse,
        handlers::health::ReadinessResponse,
        handlers::health::ReadinessChecks,
        handlers::papers::PaperUploadForm,
        handlers::papers::AnalyzePaperResponse,
    )),
    tags(
        (name = "health", description = "Service health probes"),
        (name = "papers", description = "Paper upload and analysis")
    ),
    info(
        title = "PaperLens API",
        description = "Upload a technical paper, extract authors, organizations and citations, and get back an interactive knowledge graph."
    )
)]
pub struct ApiDoc;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = if state.config.server.cors_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .server
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics))
        .nest("/api/v1", routes::api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(
            state.config.server.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Create a router with default state for integration tests
pub fn create_router_for_testing() -> Router {
    create_router(Arc::new(AppState::default()))
}
