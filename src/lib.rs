//! Chat Relay Server
//!
//! A real-time message relay: clients hold a WebSocket open, send text
//! messages, and every connected client receives every message broadcast to
//! the room.
//!
//! # Features
//!
//! - **Single broadcast hub**: one registry, one inbound queue, one fan-out loop
//! - **Failure isolation**: a dead client is pruned without disturbing the room
//! - **Backpressure**: a bounded inbound queue throttles all senders equally
//! - **Server-stamped identity**: clients cannot spoof the sender label
//! - **Rendered frames**: messages go out as escaped HTML fragments
//!
//! # Modules
//!
//! - `api`: HTTP router, WebSocket relay core, and the stats endpoint
//! - `render`: outbound message markup
//! - `config`: environment-based server configuration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use chat_relay::api::http::create_router;
//! use chat_relay::api::websocket::{AppState, Hub};
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (hub, inbound) = Hub::new(1);
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!     tokio::spawn(hub.clone().run(inbound, shutdown_rx));
//!
//!     let state = Arc::new(AppState::new(hub));
//!     let app = create_router(state, "static");
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod render;

// Re-export commonly used items at crate root
pub use api::websocket::{AppState, ConnectionId, Envelope, Hub, InboundFrame, Registry};
pub use config::ServerConfig;

/// Result alias for fallible operations crossing module boundaries
pub type RelayResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
