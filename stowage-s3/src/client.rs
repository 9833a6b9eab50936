//! S3 client construction from validated access settings.

use std::fmt;
use tracing::info;

use crate::AccessConfiguration;

/// Provider name recorded on the static credentials.
const CREDENTIALS_PROVIDER: &str = "stowage";

/// An initialized S3 client together with the settings it was built from.
#[derive(Clone)]
pub struct S3ClientHandle {
    client: aws_sdk_s3::Client,
    region: String,
    endpoint: String,
    force_path_style: bool,
}

impl S3ClientHandle {
    /// Build a client from already validated access settings.
    ///
    /// No network traffic happens here; the first request made through the
    /// client is the first contact with the endpoint.
    pub fn from_access(access: &AccessConfiguration) -> Self {
        let credentials = aws_credential_types::Credentials::new(
            &access.credentials.access_key_id,
            &access.credentials.secret_access_key,
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(access.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&access.endpoint)
            .force_path_style(access.force_path_style)
            .build();

        info!(
            region = %access.region,
            endpoint = %access.endpoint,
            force_path_style = access.force_path_style,
            "S3 client initialized"
        );

        Self {
            client: aws_sdk_s3::Client::from_conf(config),
            region: access.region.clone(),
            endpoint: access.endpoint.clone(),
            force_path_style: access.force_path_style,
        }
    }

    /// Get the S3 client.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }

    /// Take the S3 client.
    pub fn into_inner(self) -> aws_sdk_s3::Client {
        self.client
    }

    /// Region the client signs requests for.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Endpoint the client sends requests to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether buckets are addressed by path rather than subdomain.
    pub fn force_path_style(&self) -> bool {
        self.force_path_style
    }
}

impl fmt::Debug for S3ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3ClientHandle")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("force_path_style", &self.force_path_style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccessCredentials;

    fn access() -> AccessConfiguration {
        AccessConfiguration::new(
            "eu-central-1",
            AccessCredentials::new("AKIA1234", "secret123"),
            "http://localhost:9000",
        )
        .force_path_style(true)
    }

    #[tokio::test]
    async fn test_handle_carries_settings() {
        let handle = S3ClientHandle::from_access(&access());

        assert_eq!(handle.region(), "eu-central-1");
        assert_eq!(handle.endpoint(), "http://localhost:9000");
        assert!(handle.force_path_style());
        assert_eq!(
            handle.client().config().region().map(|r| r.to_string()),
            Some("eu-central-1".to_string())
        );
    }

    #[tokio::test]
    async fn test_debug_omits_credentials() {
        let handle = S3ClientHandle::from_access(&access());
        let printed = format!("{:?}", handle);
        assert!(printed.contains("eu-central-1"));
        assert!(!printed.contains("secret123"));
        assert!(!printed.contains("AKIA1234"));
    }
}
