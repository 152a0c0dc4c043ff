//! Error types for the memorize engine.
//!
//! Gameplay never fails: bad card choices are ignored. Errors exist for
//! configuration problems and for the storage port, whose failures the
//! engine logs and absorbs.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum MemorizeError {
    /// The game configuration is unusable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The key-value store could not read or write a key.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Leaderboard bytes could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, MemorizeError>;
