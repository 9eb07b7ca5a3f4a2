// rest/routes/tasks.rs — the five CRUD routes over the task store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::store::Task;
use crate::AppContext;

/// The id segment is extracted as a string so a non-integer value maps to the
/// JSON error envelope instead of axum's plain-text rejection.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// Same idea for the body: take the `Json` rejection ourselves so malformed
/// payloads answer 400 with the envelope rather than axum's default 400/422.
fn decode_body(body: Result<Json<Task>, JsonRejection>) -> Result<Task, ApiError> {
    body.map(|Json(task)| task).map_err(|_| ApiError::InvalidBody)
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.list().await)
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    body: Result<Json<Task>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = decode_body(body)?;
    let created = ctx.store.append(task).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;
    match ctx.store.find_by_id(id).await {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    body: Result<Json<Task>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&id)?;
    let new_task = decode_body(body)?;
    match ctx.store.replace_by_id(id, new_task).await {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id)?;
    match ctx.store.remove_by_id(id).await {
        Some(_) => Ok(Json(json!({ "message": "task deleted" }))),
        None => Err(ApiError::NotFound),
    }
}
