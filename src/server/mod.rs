// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main server components, including:
//! - Connection dispatch (accept loop, one task per connection)
//! - Per-connection request handling (join / teardown)
//! - Matchmaking logic (registry, match rendezvous)
//! - The typed-field wire codec and the error taxonomy

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod matchmaking;
pub mod wire;
