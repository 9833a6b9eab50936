//! # Stowage S3
//!
//! Validated S3 access settings, persisted through a key-value store, and
//! client construction from them.
//!
//! Two settings are kept, each under its own fixed key:
//!
//! - [`AccessConfiguration`] under [`ACCESS_KEY`] (`"s3-access"`)
//! - [`BucketSelection`] under [`BUCKET_KEY`] (`"s3-bucket"`)
//!
//! Input is checked before it is written and stored values are checked again
//! when read, so a malformed configuration never reaches the caller.
//!
//! ## Quick Start
//!
//! ```no_run
//! use serde_json::json;
//! use stowage_s3::S3Settings;
//! use stowage_storage::FileStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = S3Settings::new(FileStore::with_path("./settings").await?);
//!
//! settings
//!     .write_access(&json!({
//!         "region": "us-east-1",
//!         "credentials": { "accessKeyId": "AKIA1234", "secretAccessKey": "secret123" },
//!         "endpoint": "https://s3.example.com",
//!         "forcePathStyle": true
//!     }))
//!     .await?;
//! settings.write_bucket(&json!({ "bucket": "media" })).await?;
//!
//! let handle = settings.create_client().await?;
//! let bucket = settings.read_bucket().await?;
//! handle.client().list_objects_v2().bucket(&bucket.bucket).send().await?;
//! # Ok(())
//! # }
//! ```

mod access;
mod bucket;
mod client;
mod error;
mod service;

pub use access::{
    ACCESS_KEY_ID_MIN_LEN, AccessConfiguration, AccessCredentials, ENDPOINT_MIN_LEN,
    REGION_MIN_LEN, SECRET_ACCESS_KEY_MIN_LEN,
};
pub use bucket::{BUCKET_MIN_LEN, BucketSelection};
pub use client::S3ClientHandle;
pub use error::{Result, SettingsError};
pub use service::{ACCESS_KEY, BUCKET_KEY, S3Settings};

// Re-export the SDK for callers of `S3ClientHandle::client`
pub use aws_sdk_s3;
