//! S3 client configuration and creation.

use std::time::Duration;

use aws_config::BehaviorVersion;
use aws_config::timeout::TimeoutConfig;
use aws_sdk_s3::Client;
use bt_error::{BtError, Result};
use serde::{Deserialize, Serialize};

use super::RetryConfig;

/// Configuration for S3 access.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// S3 bucket name
    pub bucket: String,

    /// AWS region
    pub region: Option<String>,

    /// Custom endpoint URL (for LocalStack or S3-compatible stores)
    pub endpoint: Option<String>,

    /// Send unsigned requests, as a browser reading a public bucket does
    pub anonymous: bool,

    /// AWS profile name (optional, only used for signed requests)
    pub profile: Option<String>,

    /// Per-operation timeout in seconds
    pub timeout_secs: u64,

    /// Retry behaviour for individual page requests
    #[serde(skip)]
    pub retry: RetryConfig,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            region: None,
            endpoint: None,
            anonymous: true,
            profile: None,
            timeout_secs: 30,
            retry: RetryConfig::default(),
        }
    }
}

impl S3Config {
    /// Create a new S3Config with the required bucket name.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }

    /// Set a custom endpoint (for LocalStack).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the AWS region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Choose between unsigned (anonymous) and signed requests.
    pub fn with_anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }

    /// Set the AWS profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the per-operation timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Set the retry configuration.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Check that the configuration can produce a usable client.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.trim().is_empty() {
            return Err(BtError::Config("bucket name must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(BtError::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// The bucket's public base URL, used for object links.
    ///
    /// Path-style under a custom endpoint, virtual-hosted style otherwise.
    pub fn public_base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket),
            None => {
                let region = self.region.as_deref().unwrap_or("us-east-1");
                format!("https://{}.s3.{}.amazonaws.com", self.bucket, region)
            }
        }
    }
}

/// Create an S3 client from configuration.
pub async fn create_s3_client(config: &S3Config) -> Result<Client> {
    use aws_config::Region;

    config.validate()?;

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(
        TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(config.timeout_secs))
            .build(),
    );

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    if config.anonymous {
        loader = loader.no_credentials();
    } else if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    let sdk_config = loader.load().await;

    // Path-style addressing for custom endpoints (LocalStack, MinIO)
    let builder = aws_sdk_s3::config::Builder::from(&sdk_config);
    let s3_config = if config.endpoint.is_some() {
        builder.force_path_style(true).build()
    } else {
        builder.build()
    };

    Ok(Client::from_conf(s3_config))
}
