/// Centralized error types for the connection-handling layer.
///
/// Both variants abort only the connection they occur on: the handler task
/// logs the error and exits, and registry state is never touched outside
/// the guarded `assign`/`remove` calls. A teardown of an unknown match id
/// is not an error at this level; it is reported to the peer as a negative
/// confirmation string.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// Malformed or out-of-order wire fields (bad UTF-8, oversized field,
    /// unknown action). The connection is dropped without a response.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// I/O fault or peer disconnect, at any point in the handler's life.
    #[error("connection error: {0}")]
    Connection(#[from] std::io::Error),
}
