//! Errors raised while opening the settings store.

use stowage_config::ConfigError;
use stowage_storage::StoreError;
use thiserror::Error;

/// Result type for opening the settings store.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while opening the settings store.
#[derive(Debug, Error)]
pub enum Error {
    /// Store settings could not be loaded or are invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured store could not be initialized.
    #[error(transparent)]
    Store(#[from] StoreError),
}
