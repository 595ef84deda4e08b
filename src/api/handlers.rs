use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};
use tracing::info;

use crate::{
    api::models::*,
    error::error_body,
    github::{parse_repository_url, GitHubClient},
    llm::{AnalysisResult, Summarizer},
    Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub github: GitHubClient,
    pub summarizer: Summarizer,
}

/// GET / - Liveness message
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Service is running! Send POST to /summarize".to_string(),
    })
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /summarize - Summarize a GitHub repository
pub async fn summarize(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>> {
    let Json(request) = payload?;
    let repo = parse_repository_url(&request.github_url)?;

    let data = state.github.fetch_repository(&repo).await?;
    let analysis = state.summarizer.generate(&data.readme, &data.files).await;

    info!(
        "Summarized {}/{} ({} files considered)",
        repo.owner,
        repo.repo,
        data.files.len()
    );

    Ok(Json(analysis))
}

/// Fallback for known routes hit with an unsupported method
pub async fn method_not_allowed() -> Response {
    error_body(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    error_body(StatusCode::NOT_FOUND, "Not Found")
}
