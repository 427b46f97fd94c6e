use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Request-time failures surfaced to the caller, both rendered as a 500
/// response carrying `{"detail": "<message>"}`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("news lookup failed: {detail}")]
    UpstreamNews { detail: String },

    #[error("content generation failed: {detail}")]
    Generation { detail: String },
}

impl ServiceError {
    pub fn upstream_news(detail: impl Into<String>) -> Self {
        ServiceError::UpstreamNews {
            detail: detail.into(),
        }
    }

    pub fn generation(detail: impl Into<String>) -> Self {
        ServiceError::Generation {
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
