//! Error types raised by key-value stores.

use thiserror::Error;

/// Errors surfaced by `KeyValueStore` implementations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid key {0:?}: use letters, digits, '-' or '_'")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
