//! Validated access to persisted S3 settings.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use stowage_storage::{KeyValueStore, MemoryStore};
use stowage_validation::{Validate, ValidationErrors, ValidationPipe};
use tracing::{debug, warn};

use crate::{AccessConfiguration, BucketSelection, Result, S3ClientHandle};

/// Storage key of the access configuration.
pub const ACCESS_KEY: &str = "s3-access";

/// Storage key of the bucket selection.
pub const BUCKET_KEY: &str = "s3-bucket";

/// Reads and writes S3 settings through a key-value store.
///
/// Every value is validated before it is written and again after it is read,
/// so neither the store nor a caller ever holds a malformed configuration.
/// The service keeps no state of its own; build one per process and clone it
/// freely.
#[derive(Clone)]
pub struct S3Settings {
    store: Arc<dyn KeyValueStore>,
}

impl S3Settings {
    /// Create a service over a store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create a service over a store that is shared with other components.
    pub fn from_shared(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Create a service over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Get the underlying store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    // Access configuration

    /// Validate untyped input as an access configuration.
    ///
    /// Undeclared attributes are dropped. See [`AccessConfiguration::parse`]
    /// for the accepted layouts of the key pair.
    pub fn validate_access(&self, input: &Value) -> Result<AccessConfiguration> {
        Ok(AccessConfiguration::parse(Some(input))?)
    }

    /// Read the stored access configuration. Absence is a validation error.
    pub async fn read_access(&self) -> Result<AccessConfiguration> {
        self.read(ACCESS_KEY, AccessConfiguration::parse).await
    }

    /// Validate input and store it as the access configuration.
    ///
    /// Nothing is written if validation fails.
    pub async fn write_access(&self, input: &Value) -> Result<()> {
        let access = self.validate_access(input)?;
        self.store_access(&access).await
    }

    /// Store a typed access configuration after validating it.
    pub async fn store_access(&self, access: &AccessConfiguration) -> Result<()> {
        self.write(ACCESS_KEY, access).await
    }

    // Bucket selection

    /// Validate untyped input as a bucket selection.
    pub fn validate_bucket(&self, input: &Value) -> Result<BucketSelection> {
        Ok(BucketSelection::parse(Some(input))?)
    }

    /// Read the stored bucket selection. Absence is a validation error.
    pub async fn read_bucket(&self) -> Result<BucketSelection> {
        self.read(BUCKET_KEY, BucketSelection::parse).await
    }

    /// Validate input and store it as the bucket selection.
    ///
    /// Nothing is written if validation fails.
    pub async fn write_bucket(&self, input: &Value) -> Result<()> {
        let bucket = self.validate_bucket(input)?;
        self.store_bucket(&bucket).await
    }

    /// Store a typed bucket selection after validating it.
    pub async fn store_bucket(&self, bucket: &BucketSelection) -> Result<()> {
        self.write(BUCKET_KEY, bucket).await
    }

    // Client

    /// Build an S3 client from the stored access configuration.
    pub async fn create_client(&self) -> Result<S3ClientHandle> {
        let access = self.read_access().await?;
        Ok(S3ClientHandle::from_access(&access))
    }

    async fn read<T>(
        &self,
        key: &str,
        parse: fn(Option<&Value>) -> std::result::Result<T, ValidationErrors>,
    ) -> Result<T> {
        let raw = self.store.get_item(key).await?;
        debug!(key, found = raw.is_some(), "Read S3 setting");

        parse(raw.as_ref()).map_err(|errors| {
            warn!(key, %errors, "Stored S3 setting failed validation");
            errors.into()
        })
    }

    async fn write<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Validate + Serialize,
    {
        let json = ValidationPipe::serialize(value)?;
        self.store.set_item(key, json).await?;
        debug!(key, "Wrote S3 setting");
        Ok(())
    }
}

impl Default for S3Settings {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl fmt::Debug for S3Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Settings").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessCredentials, SettingsError};
    use serde_json::json;

    fn flat_access() -> Value {
        json!({
            "accessKeyId": "AKIA1234",
            "secretAccessKey": "secret123",
            "region": "us-east-1",
            "endpoint": "https://s3.example.com",
            "forcePathStyle": true
        })
    }

    fn nested_access() -> Value {
        json!({
            "region": "us-east-1",
            "credentials": {
                "accessKeyId": "AKIA1234",
                "secretAccessKey": "secret123"
            },
            "endpoint": "https://s3.example.com",
            "forcePathStyle": true
        })
    }

    #[tokio::test]
    async fn test_flat_credentials_are_stored_nested() {
        let settings = S3Settings::in_memory();
        settings.write_access(&flat_access()).await.unwrap();

        assert_eq!(
            settings.store().get_item(ACCESS_KEY).await.unwrap(),
            Some(nested_access())
        );
        assert_eq!(
            settings.read_access().await.unwrap(),
            settings.validate_access(&nested_access()).unwrap()
        );
    }

    #[test]
    fn test_validate_access() {
        let access = S3Settings::in_memory()
            .validate_access(&nested_access())
            .unwrap();
        assert_eq!(access.region, "us-east-1");
        assert_eq!(access.credentials.access_key_id, "AKIA1234");
        assert!(access.force_path_style);
    }

    #[test]
    fn test_validate_access_reports_every_field() {
        let err = S3Settings::in_memory()
            .validate_access(&json!({
                "region": "us",
                "credentials": { "accessKeyId": "short" },
                "endpoint": "http://",
                "forcePathStyle": "yes"
            }))
            .unwrap_err();

        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.len(), 5);
        assert!(errors.has("region", "minLength"));
        assert!(errors.has("credentials.accessKeyId", "minLength"));
        assert!(errors.has("credentials.secretAccessKey", "required"));
        assert!(errors.has("endpoint", "minLength"));
        assert!(errors.has("forcePathStyle", "type"));
    }

    #[tokio::test]
    async fn test_write_then_read_access() {
        let settings = S3Settings::in_memory();
        settings.write_access(&nested_access()).await.unwrap();

        let access = settings.read_access().await.unwrap();
        assert_eq!(access, settings.validate_access(&nested_access()).unwrap());
    }

    #[tokio::test]
    async fn test_write_strips_unknown_attributes() {
        let settings = S3Settings::in_memory();
        let mut input = nested_access();
        input["sessionToken"] = json!("ignored");
        input["credentials"]["extra"] = json!(true);

        settings.write_access(&input).await.unwrap();

        let stored = settings.store().get_item(ACCESS_KEY).await.unwrap();
        assert_eq!(stored, Some(nested_access()));
    }

    #[tokio::test]
    async fn test_read_absent_access_is_validation_error() {
        let err = S3Settings::in_memory().read_access().await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.validation_errors().unwrap().has("", "required"));
    }

    #[tokio::test]
    async fn test_read_malformed_stored_value() {
        let store = MemoryStore::new();
        store
            .set_item(ACCESS_KEY, json!({"region": "us-east-1"}))
            .await
            .unwrap();

        let settings = S3Settings::new(store);
        assert!(settings.read_access().await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_invalid_write_leaves_store_untouched() {
        let settings = S3Settings::in_memory();
        settings.write_access(&nested_access()).await.unwrap();

        let mut bad = nested_access();
        bad["region"] = json!("x");
        assert!(settings.write_access(&bad).await.is_err());

        assert_eq!(
            settings.store().get_item(ACCESS_KEY).await.unwrap(),
            Some(nested_access())
        );
    }

    #[tokio::test]
    async fn test_store_access_validates_typed_value() {
        let settings = S3Settings::in_memory();
        let access = AccessConfiguration::new(
            "us-east-1",
            AccessCredentials::new("AKIA1234", "tiny"),
            "https://s3.example.com",
        );

        let err = settings.store_access(&access).await.unwrap_err();
        assert!(matches!(err, SettingsError::Validation(_)));
        assert_eq!(settings.store().get_item(ACCESS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_bucket_round_trip() {
        let settings = S3Settings::in_memory();

        assert!(settings.validate_bucket(&json!({"bucket": ""})).is_err());
        assert_eq!(
            settings
                .validate_bucket(&json!({"bucket": "my-bucket"}))
                .unwrap(),
            BucketSelection::new("my-bucket")
        );

        settings
            .write_bucket(&json!({"bucket": "my-bucket"}))
            .await
            .unwrap();
        assert_eq!(
            settings.read_bucket().await.unwrap(),
            BucketSelection::new("my-bucket")
        );
        assert_eq!(
            settings.store().get_item(BUCKET_KEY).await.unwrap(),
            Some(json!({"bucket": "my-bucket"}))
        );
    }

    #[tokio::test]
    async fn test_access_and_bucket_use_separate_keys() {
        let settings = S3Settings::in_memory();
        settings
            .store_bucket(&BucketSelection::new("logs"))
            .await
            .unwrap();

        assert!(settings.read_access().await.is_err());
        assert_eq!(settings.read_bucket().await.unwrap().bucket, "logs");
    }

    #[tokio::test]
    async fn test_create_client() {
        let settings = S3Settings::in_memory();
        assert!(settings.create_client().await.unwrap_err().is_validation());

        settings.write_access(&nested_access()).await.unwrap();
        let handle = settings.create_client().await.unwrap();
        assert_eq!(handle.region(), "us-east-1");
        assert_eq!(handle.endpoint(), "https://s3.example.com");
        assert!(handle.force_path_style());
    }
}
