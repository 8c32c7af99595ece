//! Shared application state

use std::sync::Arc;

use super::hub::Hub;

/// State handed to every HTTP and WebSocket handler
pub struct AppState {
    /// The process-wide broadcast hub
    pub hub: Arc<Hub>,

    /// Unix timestamp of server start
    pub started_at: i64,
}

impl AppState {
    pub fn new(hub: Arc<Hub>) -> Self {
        Self {
            hub,
            started_at: chrono::Utc::now().timestamp(),
        }
    }
}
