//! Wire message types for the relay

use serde::{Deserialize, Serialize};

/// Inbound frame sent by a client: `{ "content": string }`
///
/// Any additional fields (including a client-supplied sender label) are
/// accepted and discarded; the hub stamps its own label before broadcast.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InboundFrame {
    /// User-supplied message payload
    pub content: String,
}

/// The unit of broadcast: one message with its server-assigned sender label.
///
/// Constructed when an inbound frame is decoded, stamped with the hub's
/// label, and consumed exactly once by the broadcast loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Label identifying the originating hub, never the client
    pub sender_label: String,

    /// User-supplied message payload
    pub content: String,
}
