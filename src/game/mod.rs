// src/game/mod.rs

//! Game logic root module.
//!
//! Holds the pure duel-resolution algorithms. Nothing in here touches
//! registry state or the network.

pub mod dice;
