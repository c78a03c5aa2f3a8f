/// Server configuration constants.
///
/// This module defines the network parameters for the matchmaking server.
pub const BIND_ADDR: &str = "127.0.0.1"; // Interface the listener binds to.

/// Port the matchmaking server listens on.
pub const PORT: u16 = 6000;
