//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Key-value storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key cannot be stored by this backend.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Stored bytes are not valid JSON.
    #[error("Corrupt value for key '{key}': {reason}")]
    Corrupt {
        /// Key whose value could not be decoded.
        key: String,
        /// Decoder message.
        reason: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Check if this is an invalid key error.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }

    /// Check if this is a corrupt value error.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
