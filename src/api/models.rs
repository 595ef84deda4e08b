use serde::{Deserialize, Serialize};

/// POST /summarize request body
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub github_url: String,
}

/// Liveness message for GET /
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
