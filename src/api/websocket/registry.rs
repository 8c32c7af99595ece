//! Registry of connected clients
//!
//! Tracks every client currently eligible for broadcast. Membership is
//! mutated by ingress handlers (insert on connect, remove on disconnect) and
//! by the broadcast loop (remove on write failure), so every mutation and the
//! fan-out enumeration go through one lock. The fan-out pass holds the write
//! lock for its whole duration; passes are short, so registration simply
//! waits its turn.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Process-unique identifier for one client connection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Registry of active clients keyed by connection ID
///
/// Each entry holds the sending half of that client's bounded outbound
/// channel. Removing an entry drops the sender, which ends the client's
/// writer task and closes the underlying stream.
pub struct Registry {
    clients: RwLock<HashMap<ConnectionId, mpsc::Sender<String>>>,
    next_id: AtomicU64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Register a client and return its new connection ID
    pub fn register(&self, outbound: mpsc::Sender<String>) -> ConnectionId {
        let id = ConnectionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.clients.write().insert(id, outbound);
        id
    }

    /// Remove a client. Idempotent: removing an absent client is a no-op.
    ///
    /// Returns true if the client was present. Dropping the stored sender
    /// closes the client's outbound channel as a side effect.
    pub fn unregister(&self, id: ConnectionId) -> bool {
        self.clients.write().remove(&id).is_some()
    }

    /// Number of currently registered clients
    pub fn len(&self) -> usize {
        self.clients.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.read().is_empty()
    }

    /// Deliver one rendered frame to every registered client.
    ///
    /// Holds exclusive access for the duration of the pass. A client whose
    /// outbound channel is closed or full is pruned immediately; the pass
    /// continues for the remaining clients. Returns the number of clients
    /// the frame was handed to.
    pub fn fan_out(&self, frame: &str) -> usize {
        let mut clients = self.clients.write();

        let mut failed = Vec::new();
        let mut delivered = 0;

        for (id, outbound) in clients.iter() {
            match outbound.try_send(frame.to_owned()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Closed(_)) | Err(TrySendError::Full(_)) => {
                    failed.push(*id);
                }
            }
        }

        for id in failed {
            clients.remove(&id);
            eprintln!("[Hub] Dropped {} during broadcast", id);
        }

        delivered
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_assigns_unique_ids() {
        let registry = Registry::new();
        let (tx, _rx) = mpsc::channel(1);
        let a = registry.register(tx.clone());
        let b = registry.register(tx);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let registry = Registry::new();
        let (tx, _rx) = mpsc::channel(1);
        let id = registry.register(tx);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_fan_out_reaches_every_client() {
        let registry = Registry::new();
        let (tx_a, mut rx_a) = mpsc::channel(8);
        let (tx_b, mut rx_b) = mpsc::channel(8);
        registry.register(tx_a);
        registry.register(tx_b);

        let delivered = registry.fan_out("<p>hi</p>");
        assert_eq!(delivered, 2);
        assert_eq!(rx_a.recv().await.unwrap(), "<p>hi</p>");
        assert_eq!(rx_b.recv().await.unwrap(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fan_out_prunes_closed_client() {
        let registry = Registry::new();
        let (tx_a, mut rx_a) = mpsc::channel(8);
        let (tx_dead, rx_dead) = mpsc::channel(8);
        registry.register(tx_a);
        let dead = registry.register(tx_dead);
        drop(rx_dead);

        let delivered = registry.fan_out("<p>one</p>");
        assert_eq!(delivered, 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(rx_a.recv().await.unwrap(), "<p>one</p>");

        // A later pass no longer sees the pruned client
        assert!(!registry.unregister(dead));
        let delivered = registry.fan_out("<p>two</p>");
        assert_eq!(delivered, 1);
        assert_eq!(rx_a.recv().await.unwrap(), "<p>two</p>");
    }

    #[tokio::test]
    async fn test_fan_out_prunes_client_with_full_buffer() {
        let registry = Registry::new();
        let (tx, _rx) = mpsc::channel(1);
        registry.register(tx);

        assert_eq!(registry.fan_out("<p>fills the buffer</p>"), 1);
        assert_eq!(registry.fan_out("<p>overflows</p>"), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_fan_out_with_no_clients() {
        let registry = Registry::new();
        assert_eq!(registry.fan_out("<p>nobody home</p>"), 0);
    }
}
