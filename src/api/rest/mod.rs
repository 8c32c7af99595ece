//! REST API module for HTTP endpoints
//!
//! Provides operational endpoints beside the WebSocket relay:
//! - `GET /api/stats` - Hub label, client count, and uptime

pub mod stats;
