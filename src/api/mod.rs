//! API module for HTTP and WebSocket endpoints
//!
//! This module provides the WebSocket relay endpoint, the REST stats
//! endpoint, and the static chat page.

pub mod http;
pub mod rest;
pub mod websocket;
