//! Web UI handler

use axum::response::Html;

/// Serve the single-page upload UI
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
