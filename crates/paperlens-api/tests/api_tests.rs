//! API Integration Tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use paperlens_api::{create_router, create_router_for_testing, state::AppState};
use paperlens_core::AppConfig;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

const BOUNDARY: &str = "paperlens-test-boundary";

/// Helper to build a multipart upload request for the papers endpoint
fn create_upload_request(file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/v1/papers")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

// =============================================================================
// Health Check Tests
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_readiness_check() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["ready"], true);
    assert!(json["checks"].is_object());
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["uptime_seconds"].is_number());
    assert!(json["total_requests"].is_number());
}

// =============================================================================
// Web UI Tests
// =============================================================================

#[tokio::test]
async fn test_index_page_served() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("PaperLens"));
    assert!(html.contains("/api/v1/papers"));
}

// =============================================================================
// Paper Analysis Tests
// =============================================================================

#[tokio::test]
async fn test_analyze_plain_text_paper() {
    let app = create_router_for_testing();

    let request = create_upload_request("paper.txt", b"Jane Doe works at Acme Corp.");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["file_type"], "text");
    assert!(json["authors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|a| a == "Jane Doe"));
    assert!(json["organizations"]
        .as_array()
        .unwrap()
        .iter()
        .any(|o| o == "Acme Corp"));
    assert_eq!(json["node_count"], 2);
    assert_eq!(json["edge_count"], 1);
    assert!(json["graph_html"].as_str().unwrap().contains("Jane Doe"));
}

#[tokio::test]
async fn test_analyze_reports_empty_entity_lists() {
    let app = create_router_for_testing();

    let request = create_upload_request("notes.txt", b"nothing interesting here");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["authors"].as_array().unwrap().len(), 0);
    assert_eq!(json["organizations"].as_array().unwrap().len(), 0);
    assert_eq!(json["citations"].as_array().unwrap().len(), 0);
    assert_eq!(json["node_count"], 0);
    assert_eq!(json["edge_count"], 0);
}

#[tokio::test]
async fn test_analyze_rejects_unsupported_format() {
    let app = create_router_for_testing();

    let request = create_upload_request("paper.docx", b"binary stuff");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_analyze_rejects_empty_upload() {
    let app = create_router_for_testing();

    let request = create_upload_request("paper.txt", b"");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_rejects_oversized_upload() {
    let mut config = AppConfig::default();
    config.server.max_upload_bytes = 1024;
    let app = create_router(Arc::new(AppState::new(config)));

    let request = create_upload_request("paper.txt", &vec![b'a'; 2048]);
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = json_body(response).await;
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_analyze_requires_file_field() {
    let app = create_router_for_testing();

    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/papers")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_analyze_corrupt_pdf_is_bad_request() {
    let app = create_router_for_testing();

    let request = create_upload_request("paper.pdf", b"this is not a pdf");
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// OpenAPI/Swagger Tests
// =============================================================================

#[tokio::test]
async fn test_swagger_ui_available() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(
        response.status() == StatusCode::OK || response.status() == StatusCode::MOVED_PERMANENTLY
    );
}

#[tokio::test]
async fn test_openapi_spec_available() {
    let app = create_router_for_testing();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["openapi"].is_string());
    assert!(json["paths"]["/api/v1/papers"].is_object());
}
