//! Main entry point for the dice duel server.
//!
//! Initializes logging, binds the TCP listener, and runs the connection
//! dispatcher over a shared match registry.

use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

use dice_duel::config;
use dice_duel::server::dispatcher;
use dice_duel::server::matchmaking::registry::MatchRegistry;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::init();

    // The single shared collection of in-progress matches, injected into
    // every connection handler.
    let registry = Arc::new(MatchRegistry::new());

    let addr = format!("{}:{}", config::server::BIND_ADDR, config::server::PORT);
    let listener = TcpListener::bind(&addr).await?;
    info!("[Server] Listening on {}", addr);

    dispatcher::run(listener, registry).await
}
