//! S3 access configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use stowage_validation::{
    MinLength, Schema, Shape, Validate, ValidationError, ValidationErrors, ValidationPipe,
};

/// Minimum length of an access key id.
pub const ACCESS_KEY_ID_MIN_LEN: usize = 8;
/// Minimum length of a secret access key.
pub const SECRET_ACCESS_KEY_MIN_LEN: usize = 8;
/// Minimum length of a region name.
pub const REGION_MIN_LEN: usize = 3;
/// Minimum length of an endpoint URL.
pub const ENDPOINT_MIN_LEN: usize = 8;

const CREDENTIAL_KEYS: [&str; 2] = ["accessKeyId", "secretAccessKey"];

/// Static key pair used to sign requests.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCredentials {
    /// Access key id.
    pub access_key_id: String,
    /// Secret access key. Never printed by `Debug`.
    pub secret_access_key: String,
}

impl AccessCredentials {
    /// Create a key pair.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    fn shape() -> Shape {
        Shape::object([
            (
                "accessKeyId",
                Shape::string().min_length(ACCESS_KEY_ID_MIN_LEN),
            ),
            (
                "secretAccessKey",
                Shape::string()
                    .min_length(SECRET_ACCESS_KEY_MIN_LEN)
                    .sensitive(),
            ),
        ])
    }

    fn collect_errors(&self, errors: &mut Vec<ValidationError>) {
        if let Err(e) = MinLength(ACCESS_KEY_ID_MIN_LEN)
            .validate(&self.access_key_id, "credentials.accessKeyId")
        {
            errors.push(e);
        }
        if let Err(e) = MinLength(SECRET_ACCESS_KEY_MIN_LEN)
            .validate(&self.secret_access_key, "credentials.secretAccessKey")
        {
            errors.push(e.redacted());
        }
    }
}

impl fmt::Debug for AccessCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Credentials and connection parameters for an S3-compatible object store.
///
/// Persisted as JSON with camelCase attribute names:
///
/// ```json
/// {
///   "region": "us-east-1",
///   "credentials": { "accessKeyId": "AKIA1234", "secretAccessKey": "secret123" },
///   "endpoint": "https://s3.example.com",
///   "forcePathStyle": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessConfiguration {
    /// Region name.
    pub region: String,
    /// Static key pair.
    pub credentials: AccessCredentials,
    /// Endpoint URL of the object store.
    pub endpoint: String,
    /// Address buckets as `<endpoint>/<bucket>` instead of by subdomain.
    pub force_path_style: bool,
}

impl AccessConfiguration {
    /// Create a configuration using virtual-hosted addressing.
    pub fn new(
        region: impl Into<String>,
        credentials: AccessCredentials,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            credentials,
            endpoint: endpoint.into(),
            force_path_style: false,
        }
    }

    /// Set path-style addressing (for MinIO, LocalStack, etc.).
    pub fn force_path_style(mut self, enabled: bool) -> Self {
        self.force_path_style = enabled;
        self
    }

    /// Validate untyped input.
    ///
    /// The key pair may be given nested under `credentials` or flat beside
    /// `region`; flat keys are moved under `credentials` before checking, so
    /// errors always name `credentials.accessKeyId` and
    /// `credentials.secretAccessKey`.
    pub fn parse(input: Option<&Value>) -> Result<Self, ValidationErrors> {
        match input {
            Some(value) => ValidationPipe::parse(Some(&*nest_credentials(value))),
            None => ValidationPipe::parse(None),
        }
    }
}

fn nest_credentials(input: &Value) -> Cow<'_, Value> {
    let Some(map) = input.as_object() else {
        return Cow::Borrowed(input);
    };
    if map.contains_key("credentials") || !CREDENTIAL_KEYS.iter().any(|k| map.contains_key(*k)) {
        return Cow::Borrowed(input);
    }

    let mut map = map.clone();
    let mut credentials = Map::new();
    for key in CREDENTIAL_KEYS {
        if let Some(value) = map.remove(key) {
            credentials.insert(key.to_string(), value);
        }
    }
    map.insert("credentials".to_string(), Value::Object(credentials));
    Cow::Owned(Value::Object(map))
}

impl Schema for AccessConfiguration {
    fn shape() -> Shape {
        Shape::object([
            ("region", Shape::string().min_length(REGION_MIN_LEN)),
            ("credentials", AccessCredentials::shape()),
            ("endpoint", Shape::string().min_length(ENDPOINT_MIN_LEN)),
            ("forcePathStyle", Shape::boolean()),
        ])
    }
}

impl Validate for AccessConfiguration {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = MinLength(REGION_MIN_LEN).validate(&self.region, "region") {
            errors.push(e);
        }
        self.credentials.collect_errors(&mut errors);
        if let Err(e) = MinLength(ENDPOINT_MIN_LEN).validate(&self.endpoint, "endpoint") {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
