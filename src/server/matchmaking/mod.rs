// src/server/matchmaking/mod.rs

//! Matchmaking layer.
//!
//! Pools joining participants by game type, pairs them into two-player
//! matches, and provides the per-match rendezvous that blocks the first
//! joiner until the duel is resolved.

pub mod game;
pub mod registry;
pub mod types;
