// rest/mod.rs — HTTP surface of the task service.
//
// Endpoints:
//   GET    /tasks
//   POST   /tasks
//   GET    /tasks/{id}
//   PUT    /tasks/{id}
//   DELETE /tasks/{id}
//   GET    /health
//
// Anything else is a 404; a known path with an unknown verb is a 405
// (axum's MethodRouter default).

pub mod error;
pub mod routes;

use anyhow::{Context as _, Result};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task)
                .put(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .fallback(routes::not_found)
        // CORS is a boundary adapter: handlers never see or set these headers.
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

/// Bind and serve until the process exits. Failure to bind the port is the
/// one fatal startup error.
pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let addr = ctx.config.listen_addr();
    let router = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
