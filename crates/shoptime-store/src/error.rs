//! # Store Error Types
//!
//! Error types for durable adapter operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the storage key                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SessionStore / FavoritesStore / CartStore                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tracing::warn! and swallowed. In-memory state stays authoritative.    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Durable adapter errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - Disk full or read-only medium
    /// - Permission denied
    #[error("I/O error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be mapped to a storage location.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// The medium refuses writes (quota exceeded, disabled storage).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Wraps an I/O error with the key it happened on.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Result type for durable adapter operations.
pub type StoreResult<T> = Result<T, StoreError>;
