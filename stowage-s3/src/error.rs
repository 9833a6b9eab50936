//! S3 settings error types.

use stowage_storage::StoreError;
use stowage_validation::ValidationErrors;
use thiserror::Error;

/// Result type for S3 settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// S3 settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Input, or a stored value, does not have the declared shape.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The key-value store itself failed.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl SettingsError {
    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// The field errors, if this is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            Self::Store(_) => None,
        }
    }
}
