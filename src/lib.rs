//! Matchmaking server for two-player dice duels.
//!
//! Pairs remote participants by game type into two-player matches,
//! resolves each duel exactly once, and reports the transcript back to
//! both sides over a one-request-per-connection TCP protocol.

pub mod config;
pub mod game;
pub mod server;
