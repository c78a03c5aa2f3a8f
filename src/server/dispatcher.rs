/// Connection dispatcher.
///
/// Accepts TCP connections and spawns one handler task per connection,
/// unbounded. No pool cap or admission control: this layer's job is
/// correctness of pairing, not load shedding. A failed handler only takes
/// its own connection down.
use std::sync::Arc;

use log::{debug, warn};
use tokio::net::TcpListener;

use crate::server::handler;
use crate::server::matchmaking::registry::MatchRegistry;

/// Run the accept loop forever (or until the listener itself fails).
pub async fn run(listener: TcpListener, registry: Arc<MatchRegistry>) -> std::io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        debug!("[Server] Connection accepted from {}", peer);
        let registry = registry.clone();
        tokio::spawn(async move {
            if let Err(err) = handler::handle_connection(stream, peer, registry).await {
                warn!("[Server] Connection from {} terminated: {}", peer, err);
            }
        });
    }
}
