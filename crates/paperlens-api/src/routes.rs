//! API route definitions

use crate::handlers::papers;
use crate::state::AppState;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Create API v1 routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new().route("/papers", post(papers::analyze_paper))
}
