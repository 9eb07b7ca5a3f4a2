use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

/// Request-level errors, rendered as `{"message": "..."}` with the matching
/// status code. Snapshot-write failures never surface here — the store logs
/// them and the request still succeeds.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path segment after `/tasks/` did not parse as an integer.
    #[error("invalid ID")]
    InvalidId,
    /// Request body was not a decodable task object.
    #[error("invalid request body")]
    InvalidBody,
    #[error("task not found")]
    NotFound,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}
