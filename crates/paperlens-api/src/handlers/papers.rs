//! Paper analysis handlers

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use paperlens_pipeline::PaperAnalysis;

/// Multipart upload form
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PaperUploadForm {
    /// The paper to analyze (PDF or plain text)
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Paper analysis response
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzePaperResponse {
    /// Original file name
    pub file_name: String,
    /// Detected file type
    pub file_type: String,
    /// Number of pages, when the format has pages
    pub page_count: Option<u32>,
    /// Character count of the extracted text
    pub char_count: usize,
    /// Word count of the extracted text
    pub word_count: usize,
    /// Detected author names
    pub authors: Vec<String>,
    /// Detected organization names
    pub organizations: Vec<String>,
    /// Detected citations and referenced works
    pub citations: Vec<String>,
    /// Knowledge graph node count
    pub node_count: usize,
    /// Knowledge graph edge count
    pub edge_count: usize,
    /// Self-contained interactive HTML visualization
    pub graph_html: String,
}

impl From<PaperAnalysis> for AnalyzePaperResponse {
    fn from(analysis: PaperAnalysis) -> Self {
        Self {
            file_name: analysis.file_name,
            file_type: analysis.file_type,
            page_count: analysis.page_count,
            char_count: analysis.char_count,
            word_count: analysis.word_count,
            authors: analysis.entities.authors.into_iter().collect(),
            organizations: analysis.entities.organizations.into_iter().collect(),
            citations: analysis.entities.citations.into_iter().collect(),
            node_count: analysis.node_count,
            edge_count: analysis.edge_count,
            graph_html: analysis.graph_html,
        }
    }
}

/// Analyze an uploaded paper
#[utoipa::path(
    post,
    path = "/api/v1/papers",
    tag = "papers",
    request_body(content = PaperUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Analysis result", body = AnalyzePaperResponse),
        (status = 400, description = "Invalid or unparseable upload", body = crate::error::ApiError),
        (status = 413, description = "Upload exceeds the size limit", body = crate::error::ApiError)
    )
)]
pub async fn analyze_paper(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("file") {
            let file_name = field
                .file_name()
                .map(|n| n.to_string())
                .ok_or_else(|| AppError::BadRequest("Upload is missing a file name".to_string()))?;

            let bytes = field.bytes().await.map_err(multipart_error)?;

            upload = Some((file_name, bytes.to_vec()));
        }
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("Missing \"file\" field".to_string()))?;

    if bytes.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }

    if bytes.len() > state.config.server.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Upload of {} bytes exceeds the limit of {} bytes",
            bytes.len(),
            state.config.server.max_upload_bytes
        )));
    }

    tracing::info!(%file_name, size = bytes.len(), "Received paper upload");

    // PDF parsing is CPU-bound, keep it off the async workers
    let worker_state = state.clone();
    let analysis = tokio::task::spawn_blocking(move || {
        worker_state.pipeline.analyze_bytes(&file_name, &bytes)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Analysis task failed: {e}")))??;

    Ok((StatusCode::OK, Json(AnalyzePaperResponse::from(analysis))))
}

/// Bodies that blow the transport cap keep their 413; everything else in
/// the multipart stream is a malformed request
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the size limit".to_string())
    } else {
        AppError::BadRequest(format!("Invalid multipart request: {err}"))
    }
}
