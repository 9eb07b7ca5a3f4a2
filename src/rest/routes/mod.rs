pub mod health;
pub mod tasks;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Router fallback for paths outside the routing table.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" })))
}
