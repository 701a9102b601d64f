//! Error types
//!
//! Nothing in the game core is fatal. These only surface at the edges:
//! the key-value backend and engine construction.

use thiserror::Error;

/// Failure talking to the key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage available (private browsing, no window, ...)
    #[error("key-value storage is unavailable")]
    Unavailable,
    /// Backend rejected the operation (quota exceeded, security error)
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure building a game engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("word bank must contain at least one word")]
    EmptyWordBank,
}
