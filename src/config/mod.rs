/// Main configuration module.
///
/// Re-exports submodules for server and game configuration.
pub mod game;
pub mod server;
