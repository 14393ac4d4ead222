//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{viewer, webhook};

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - webhooks arrive from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Polling viewer page
        .route("/", get(viewer::viewer_page))
        // Health check
        .route("/health", get(health_check))
        // Ingest (POST) and query (GET) share one path
        .route(
            "/api/webhook",
            get(webhook::list_events).post(webhook::ingest_webhook),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
