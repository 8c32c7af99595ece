//! Server stats endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::api::websocket::AppState;

/// Snapshot of the relay's current state
#[derive(Debug, Serialize)]
pub struct RelayStats {
    /// The hub's sender label
    pub label: String,
    /// Clients currently registered for broadcast
    pub connected_clients: usize,
    /// Unix timestamp of server start
    pub started_at: i64,
    /// Seconds since server start
    pub uptime_seconds: i64,
}

impl RelayStats {
    pub fn collect(state: &AppState) -> Self {
        Self {
            label: state.hub.label().to_string(),
            connected_clients: state.hub.client_count(),
            started_at: state.started_at,
            uptime_seconds: chrono::Utc::now().timestamp() - state.started_at,
        }
    }
}

/// GET /api/stats - Relay stats snapshot
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(RelayStats::collect(&state))
}
