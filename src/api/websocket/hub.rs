//! Broadcast hub
//!
//! One hub instance lives for the whole process and is passed explicitly to
//! every handler. Ingress handlers stamp and enqueue messages onto the
//! hub's bounded inbound queue; a single broadcast loop drains the queue and
//! fans each message out to every registered client.
//!
//! # Design
//!
//! The inbound queue is the sole backpressure control: while the broadcast
//! loop is busy, `publish` blocks, which throttles every ingress handler
//! equally. The queue defaults to capacity 1, the closest bounded-channel
//! equivalent of a fully unbuffered hand-off.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::watch;
use uuid::Uuid;

use super::envelope::Envelope;
use super::registry::{ConnectionId, Registry};
use crate::render;

/// Broadcast hub: client registry plus the inbound message queue
pub struct Hub {
    /// Server-assigned label stamped onto every envelope
    label: String,

    /// Registered clients eligible for broadcast
    registry: Registry,

    /// Sending half of the inbound queue, shared by all ingress handlers
    inbound_tx: mpsc::Sender<Envelope>,
}

impl Hub {
    /// Create a hub and the receiving half of its inbound queue.
    ///
    /// The receiver must be handed to [`Hub::run`], which is the queue's
    /// only consumer. Capacity below 1 is clamped to 1.
    pub fn new(queue_capacity: usize) -> (Arc<Self>, mpsc::Receiver<Envelope>) {
        let (inbound_tx, inbound_rx) = mpsc::channel(queue_capacity.max(1));

        let hub = Arc::new(Self {
            label: Uuid::new_v4().to_string(),
            registry: Registry::new(),
            inbound_tx,
        });

        (hub, inbound_rx)
    }

    /// The hub's sender label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register a client's outbound channel, returning its connection ID
    pub fn register(&self, outbound: mpsc::Sender<String>) -> ConnectionId {
        let id = self.registry.register(outbound);
        eprintln!("[Hub] {} joined ({} connected)", id, self.registry.len());
        id
    }

    /// Unregister a client. Safe to call more than once.
    pub fn unregister(&self, id: ConnectionId) {
        if self.registry.unregister(id) {
            eprintln!("[Hub] {} left ({} connected)", id, self.registry.len());
        }
    }

    /// Number of currently connected clients
    pub fn client_count(&self) -> usize {
        self.registry.len()
    }

    /// Stamp `content` with the hub's label and enqueue it for broadcast.
    ///
    /// Blocks while the inbound queue is full. Fails only once the broadcast
    /// loop has stopped and the queue is closed.
    pub async fn publish(&self, content: String) -> Result<(), mpsc::error::SendError<Envelope>> {
        let envelope = Envelope {
            sender_label: self.label.clone(),
            content,
        };
        self.inbound_tx.send(envelope).await
    }

    /// Run the broadcast loop.
    ///
    /// Waits for the next envelope, renders it once, and fans it out to
    /// every registered client, pruning any client whose write fails. Exits
    /// when the shutdown signal fires or the inbound queue closes; never
    /// terminates otherwise.
    pub async fn run(
        self: Arc<Self>,
        mut inbound: mpsc::Receiver<Envelope>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                envelope = inbound.recv() => {
                    match envelope {
                        Some(envelope) => {
                            let frame = render::message_html(&envelope).into_string();
                            self.registry.fan_out(&frame);
                        }
                        None => break,
                    }
                }

                _ = shutdown.changed() => break,
            }
        }

        eprintln!("[Hub] Broadcast loop stopped");
    }
}
