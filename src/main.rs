//! Chat Relay Server - Binary Entry Point
//!
//! Wires the hub, the broadcast loop, and the HTTP server together, and
//! shuts all of them down on Ctrl-C / SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;

use chat_relay::api::http::create_router;
use chat_relay::api::websocket::{AppState, Hub};
use chat_relay::config::ServerConfig;
use chat_relay::RelayResult;

#[tokio::main]
async fn main() -> RelayResult<()> {
    let config = ServerConfig::from_env();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    {
        let shutdown_tx = shutdown_tx.clone();
        ctrlc::set_handler(move || {
            let _ = shutdown_tx.send(true);
        })?;
    }

    let (hub, inbound) = Hub::new(config.queue_capacity);
    println!("[Server] Hub label: {}", hub.label());
    let broadcast_loop = tokio::spawn(hub.clone().run(inbound, shutdown_rx.clone()));

    let state = Arc::new(AppState::new(hub));
    let app = create_router(state, &config.static_dir);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    println!("[Server] Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_rx))
        .await?;

    // The signal that stopped the server also stops the broadcast loop;
    // join it so in-flight fan-out finishes before the process exits.
    let _ = shutdown_tx.send(true);
    broadcast_loop.await?;
    println!("[Server] Shutdown complete");

    Ok(())
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<bool>) {
    let _ = shutdown.changed().await;
}
