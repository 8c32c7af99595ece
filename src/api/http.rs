//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use super::rest::stats;
use super::websocket::handler::ws_handler;
use super::websocket::AppState;

/// Create the Axum router with all endpoints
///
/// Requests that match no route fall through to the static chat page
/// served from `static_dir`.
pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(ws_handler))
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/stats", get(stats::get_stats))
        // Chat page and assets
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
