//! UpYun client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::upyun_credentials::UpyunCredentials;
use crate::types::ApiEndpoint;
use crate::{Error, Result};

/// Default connect and I/O deadline: 300 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// UpYun client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpyunConfig {
    /// Bucket (storage space) name.
    pub bucket: String,

    /// Operator credentials.
    pub credentials: UpyunCredentials,

    /// API host name, usually one of the [`ApiEndpoint`] hosts.
    pub api_domain: String,

    /// Deadline applied to connecting and to the whole request.
    pub timeout: Duration,

    /// Emit every request and response header at debug level.
    pub debug: bool,
}

impl UpyunConfig {
    /// Creates a configuration for the given bucket with default settings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upyun_client::{UpyunConfig, UpyunCredentials};
    ///
    /// let credentials = UpyunCredentials::new("operator", "password");
    /// let config = UpyunConfig::new("my-bucket", credentials);
    /// assert_eq!(config.api_domain, "v0.api.upyun.com");
    /// ```
    pub fn new(bucket: impl Into<String>, credentials: UpyunCredentials) -> Self {
        Self {
            bucket: bucket.into(),
            credentials,
            api_domain: ApiEndpoint::default().host().to_string(),
            timeout: DEFAULT_TIMEOUT,
            debug: false,
        }
    }

    /// Sets the API host.
    pub fn with_api_domain(mut self, api_domain: impl Into<String>) -> Self {
        self.api_domain = api_domain.into();
        self
    }

    /// Sets the request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables header-level debug logging.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the credentials.
    #[inline]
    pub fn credentials(&self) -> &UpyunCredentials {
        &self.credentials
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the bucket, operator or API host is empty, or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.is_empty() {
            return Err(Error::Config("Bucket name cannot be empty".to_string()));
        }

        if self.credentials.operator.is_empty() {
            return Err(Error::Config("Operator cannot be empty".to_string()));
        }

        if self.api_domain.is_empty() {
            return Err(Error::Config("API domain cannot be empty".to_string()));
        }

        if self.timeout.is_zero() {
            return Err(Error::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        if self.timeout < Duration::from_secs(5) {
            tracing::warn!(
                target: crate::TRACING_TARGET_CLIENT,
                timeout = ?self.timeout,
                "Timeout is very short and may cause upload failures"
            );
        }

        Ok(())
    }
}
