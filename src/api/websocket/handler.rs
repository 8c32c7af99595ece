//! WebSocket connection handler
//!
//! One ingress handler runs per accepted connection. It registers the
//! client, relays inbound frames onto the hub's queue, and is guaranteed to
//! unregister and close the stream on every exit path, including task
//! abort, via a drop guard.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use super::envelope::InboundFrame;
use super::hub::Hub;
use super::registry::ConnectionId;
use super::state::AppState;

/// Rendered frames a client may fall behind before it is dropped
const OUTBOUND_BUFFER: usize = 32;

/// WebSocket upgrade handler for `GET /ws`
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    let hub = state.hub.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

/// Run one client connection to completion.
///
/// Registers with the hub, processes inbound frames until the connection
/// ends, and fully cleans up before returning.
pub async fn handle_socket(socket: WebSocket, hub: Arc<Hub>) {
    let (outbound_tx, outbound_rx) = mpsc::channel(OUTBOUND_BUFFER);
    let (sink, stream) = socket.split();

    let id = hub.register(outbound_tx);
    let guard = RegistrationGuard {
        hub: hub.clone(),
        id,
    };

    let writer = tokio::spawn(write_outbound(sink, outbound_rx));
    read_inbound(stream, &hub, id).await;

    // Unregister before joining the writer: removing the registry entry
    // drops the outbound sender, which lets the writer drain its backlog
    // and close the stream.
    drop(guard);
    let _ = writer.await;
}

/// Unregisters the connection when dropped, whichever way the handler exits
struct RegistrationGuard {
    hub: Arc<Hub>,
    id: ConnectionId,
}

impl Drop for RegistrationGuard {
    fn drop(&mut self) {
        self.hub.unregister(self.id);
    }
}

/// Forward rendered frames from the hub to the socket until the outbound
/// channel closes or a write fails, then close the stream.
async fn write_outbound(mut sink: SplitSink<WebSocket, Message>, mut outbound: mpsc::Receiver<String>) {
    while let Some(frame) = outbound.recv().await {
        if sink.send(Message::Text(frame)).await.is_err() {
            break;
        }
    }
    let _ = sink.close().await;
}

/// Read frames until the peer disconnects or the transport fails.
///
/// Malformed frames are skipped; the connection stays open.
async fn read_inbound(mut stream: SplitStream<WebSocket>, hub: &Hub, id: ConnectionId) {
    while let Some(received) = stream.next().await {
        match received {
            Ok(Message::Text(text)) => match serde_json::from_str::<InboundFrame>(&text) {
                Ok(frame) => {
                    if hub.publish(frame.content).await.is_err() {
                        // Broadcast loop is gone; nothing left to relay to
                        break;
                    }
                }
                Err(err) => {
                    eprintln!("[WebSocket] {}: skipping malformed frame: {}", id, err);
                }
            },
            Ok(Message::Close(_)) => break,
            Ok(_) => {} // binary and control frames carry no chat content
            Err(err) => {
                eprintln!("[WebSocket] {}: read error: {}", id, err);
                break;
            }
        }
    }
}
