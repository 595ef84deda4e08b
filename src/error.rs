use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid repository reference: {0}")]
    InvalidReference(String),

    #[error("{message} (status {status})")]
    Upstream { status: StatusCode, message: String },

    #[error("Invalid request body: {0}")]
    Payload(#[from] JsonRejection),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode provider response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            // Transport errors can echo request URLs and headers
            Error::Http(e) => match e.status() {
                Some(status) => format!("External HTTP request failed with status {status}"),
                None if e.is_timeout() => "External HTTP request timed out".to_string(),
                None => "External HTTP request failed".to_string(),
            },

            Error::Internal(msg) | Error::Config(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("secret") || lower.contains("token") || lower.contains("key") {
                    "Internal error (details redacted)".to_string()
                } else {
                    self.to_string()
                }
            }

            Error::InvalidReference(_)
            | Error::Upstream { .. }
            | Error::Payload(_)
            | Error::Decode(_) => self.to_string(),
        }
    }

    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidReference(_) => StatusCode::BAD_REQUEST,
            Error::Upstream { status, .. } => *status,
            Error::Payload(rejection) => rejection.status(),
            Error::Http(_) | Error::Decode(_) | Error::Config(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to API callers; server-side failures stay generic
    pub fn public_message(&self) -> String {
        match self {
            Error::InvalidReference(msg) => msg.clone(),
            Error::Upstream { message, .. } => message.clone(),
            Error::Payload(rejection) => rejection.body_text(),
            _ => "Internal server error".to_string(),
        }
    }
}

/// Render the JSON error envelope shared by every failure path
pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(json!({
        "status": "error",
        "message": message.into(),
    }));

    (status, body).into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request error: {}", self.log_safe());
        } else {
            tracing::warn!("Request rejected: {}", self.log_safe());
        }

        error_body(status, self.public_message())
    }
}
