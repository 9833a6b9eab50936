//! # Stowage
//!
//! Validated S3 access settings kept in a key-value store, and S3 clients
//! built from them.
//!
//! ```no_run
//! use serde_json::json;
//! use stowage::config::StoreSettings;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! stowage::logging::init()?;
//!
//! let settings = stowage::open(&StoreSettings::file("./settings")).await?;
//! settings.write_bucket(&json!({ "bucket": "media" })).await?;
//!
//! let handle = settings.create_client().await?;
//! println!("client for {}", handle.endpoint());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod logging;

pub use error::{Error, Result};

// Re-export member crates
pub use stowage_config as config;
pub use stowage_s3 as s3;
pub use stowage_storage as storage;
pub use stowage_validation as validation;

pub use stowage_s3::{
    ACCESS_KEY, AccessConfiguration, AccessCredentials, BUCKET_KEY, BucketSelection,
    S3ClientHandle, S3Settings, SettingsError,
};

use stowage_config::{ConfigError, StoreBackend, StoreSettings, Validate};
use stowage_storage::FileStore;
use tracing::info;

/// Open the settings service over the store `settings` selects.
pub async fn open(settings: &StoreSettings) -> Result<S3Settings> {
    settings.validate()?;

    match settings.backend {
        StoreBackend::Memory => {
            info!(backend = %settings.backend, "Opening settings store");
            Ok(S3Settings::in_memory())
        }
        StoreBackend::File => {
            let path = settings.path.as_deref().ok_or_else(|| {
                ConfigError::ValidationError("path is required for the file backend".to_string())
            })?;
            info!(backend = %settings.backend, path = ?path, "Opening settings store");
            Ok(S3Settings::new(FileStore::with_path(path).await?))
        }
    }
}

/// Read store settings from `<PREFIX>_STORE_*` variables and open the service.
pub async fn open_from_env(prefix: Option<&str>) -> Result<S3Settings> {
    let settings = StoreSettings::from_env(prefix)?;
    open(&settings).await
}

pub mod prelude {
    pub use crate::config::{StoreBackend, StoreSettings};
    pub use crate::storage::{FileStore, KeyValueStore, MemoryStore};
    pub use crate::validation::{Outcome, Shape, ValidationError, ValidationErrors};
    pub use crate::{
        AccessConfiguration, AccessCredentials, BucketSelection, S3ClientHandle, S3Settings,
        SettingsError,
    };
}
