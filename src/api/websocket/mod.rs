//! WebSocket relay core
//!
//! Provides the WebSocket endpoint at `/ws` and the broadcast hub behind it.
//!
//! ## Flow
//! - One ingress handler per connection decodes inbound frames and enqueues
//!   them onto the hub's bounded queue
//! - A single broadcast loop drains the queue and fans each message out to
//!   every registered client
//! - Clients whose writes fail are pruned without disturbing the room

pub mod envelope;
pub mod handler;
pub mod hub;
pub mod registry;
pub mod state;

// Re-export commonly used items
pub use envelope::{Envelope, InboundFrame};
pub use hub::Hub;
pub use registry::{ConnectionId, Registry};
pub use state::AppState;
