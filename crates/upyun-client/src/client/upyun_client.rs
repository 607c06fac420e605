//! High-level UpYun client implementation.
//!
//! This module holds the client value and the request executor every
//! storage operation goes through.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use jiff::Timestamp;
use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, DATE, HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, error, info, instrument, warn};

use super::{UpyunConfig, UpyunCredentials};
use crate::types::{UploadOptions, UploadSource, VENDOR_HEADER_PREFIX};
use crate::{
    Error, Result, TRACING_TARGET_CLIENT, TRACING_TARGET_OPERATIONS, TRACING_TARGET_WIRE, signer,
};

/// Scheme of the API URLs.
const API_SCHEME: &str = "http";

const CONTENT_MD5: HeaderName = HeaderName::from_static("content-md5");
const CONTENT_SECRET: HeaderName = HeaderName::from_static("content-secret");

/// How the body of a successful response is consumed.
pub(crate) enum ResponseMode<'a> {
    /// Buffer the body and return it as text.
    Text,
    /// Stream the body into the sink; a missing sink is an error.
    Stream(Option<&'a mut dyn Write>),
}

/// Values consumed by the next upload only.
#[derive(Debug, Default)]
struct PendingUpload {
    content_md5: Option<String>,
    content_secret: Option<String>,
}

/// Blocking client for one UpYun bucket.
///
/// Requests record the `x-upyun-*` headers of the last successful response
/// and consume the pending one-shot upload options, so every request method
/// takes `&mut self`. Wrap the client in a `Mutex` to share it between
/// threads.
pub struct UpyunClient {
    http: Client,
    config: UpyunConfig,
    pending: PendingUpload,
    response_headers: Option<HashMap<String, String>>,
}

impl UpyunClient {
    /// Creates a new client with the provided configuration.
    ///
    /// This does not contact the server.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The HTTP client cannot be built
    #[instrument(skip(config), target = TRACING_TARGET_CLIENT, fields(bucket = %config.bucket))]
    pub fn new(config: UpyunConfig) -> Result<Self> {
        info!(target: TRACING_TARGET_CLIENT, "Initializing UpYun client");

        config.validate().map_err(|e| {
            error!(target: TRACING_TARGET_CLIENT, error = %e, "Configuration validation failed");
            e
        })?;

        let http = Self::build_http(config.timeout)?;

        info!(
            target: TRACING_TARGET_CLIENT,
            api_domain = %config.api_domain,
            operator = %config.credentials.operator_masked(),
            timeout = ?config.timeout,
            "UpYun client initialized successfully"
        );

        Ok(Self {
            http,
            config,
            pending: PendingUpload::default(),
            response_headers: None,
        })
    }

    /// Creates a client for a bucket from an operator name and plain password.
    ///
    /// The password is hashed immediately and never stored in plain form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upyun_client::UpyunClient;
    ///
    /// let client = UpyunClient::with_password("bucket", "operator", "password").unwrap();
    /// assert_eq!(client.api_domain(), "v0.api.upyun.com");
    /// ```
    pub fn with_password(bucket: &str, operator: &str, password: &str) -> Result<Self> {
        let credentials = UpyunCredentials::new(operator, password);
        Self::new(UpyunConfig::new(bucket, credentials))
    }

    fn build_http(timeout: Duration) -> Result<Client> {
        Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(format!("upyun-client/{}", crate::version()))
            .build()
            .map_err(|e| {
                error!(target: TRACING_TARGET_CLIENT, error = %e, "Failed to build HTTP client");
                Error::Config(format!("Failed to build HTTP client: {e}"))
            })
    }

    /// Returns the client configuration.
    #[inline]
    pub fn config(&self) -> &UpyunConfig {
        &self.config
    }

    /// Returns the bucket name.
    #[inline]
    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    /// Returns the API host requests are sent to.
    #[inline]
    pub fn api_domain(&self) -> &str {
        &self.config.api_domain
    }

    /// Switches the API host, usually to one of the
    /// [`ApiEndpoint`](crate::ApiEndpoint) hosts.
    ///
    /// The value is not validated.
    pub fn set_api_domain(&mut self, api_domain: impl Into<String>) {
        self.config.api_domain = api_domain.into();
        debug!(
            target: TRACING_TARGET_CLIENT,
            api_domain = %self.config.api_domain,
            "API domain changed"
        );
    }

    /// Returns the request deadline.
    #[inline]
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Sets the request deadline and rebuilds the HTTP client with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or the HTTP client cannot be
    /// rebuilt; the previous client stays in place in that case.
    pub fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        if timeout.is_zero() {
            return Err(Error::Config(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        self.http = Self::build_http(timeout)?;
        self.config.timeout = timeout;
        debug!(target: TRACING_TARGET_CLIENT, timeout = ?timeout, "Timeout changed");
        Ok(())
    }

    /// Returns whether header-level debug logging is enabled.
    #[inline]
    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    /// Enables or disables header-level debug logging.
    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
    }

    /// Sets the MD5 the server verifies the next upload against.
    ///
    /// On mismatch the server answers `406 Not Acceptable`. The value is
    /// cleared by the next upload.
    pub fn set_content_md5(&mut self, content_md5: impl Into<String>) {
        self.pending.content_md5 = Some(content_md5.into());
    }

    /// Sets the access secret of the next uploaded file.
    ///
    /// Once set, the stored file is only reachable through its URL followed
    /// by the thumbnail separator and the secret. The value is cleared by the
    /// next upload.
    pub fn set_content_secret(&mut self, content_secret: impl Into<String>) {
        self.pending.content_secret = Some(content_secret.into());
    }

    /// Returns the vendor headers of the last successful response, if any.
    ///
    /// Header names are lower-case.
    #[inline]
    pub fn response_headers(&self) -> Option<&HashMap<String, String>> {
        self.response_headers.as_ref()
    }

    /// Sends one signed request.
    ///
    /// An `upload` turns a `PUT`/`POST` into a streamed `POST` that carries
    /// the pending one-shot headers. On success the vendor headers of the
    /// response replace the cached ones; in [`ResponseMode::Text`] the body is
    /// returned, in [`ResponseMode::Stream`] it is copied into the sink and an
    /// empty string is returned.
    #[instrument(
        skip_all,
        target = TRACING_TARGET_OPERATIONS,
        fields(method = %method, path = %path)
    )]
    pub(crate) fn execute(
        &mut self,
        method: Method,
        path: &str,
        headers: &[(&'static str, &str)],
        upload: Option<(UploadSource, UploadOptions)>,
        mode: ResponseMode<'_>,
    ) -> Result<String> {
        if matches!(mode, ResponseMode::Stream(None)) {
            warn!(target: TRACING_TARGET_OPERATIONS, "Download requested without an output sink");
            return Err(Error::MissingSink);
        }

        let uri = format!("/{}{}", self.config.bucket, path);
        let url = format!("{API_SCHEME}://{}{}", self.config.api_domain, uri);

        let mut header_map = HeaderMap::new();
        for (name, value) in headers {
            header_map.insert(*name, header_value(value)?);
        }

        let mut method = method;
        let mut body = None;
        let mut length = 0;

        let carries_body = method == Method::PUT || method == Method::POST;
        if let Some((source, options)) = upload.filter(|_| carries_body) {
            method = Method::POST;
            length = source.len();

            // One-shot values are cleared even when explicit options win.
            let pending = std::mem::take(&mut self.pending);
            if let Some(content_md5) = options.content_md5.or(pending.content_md5) {
                header_map.insert(CONTENT_MD5, header_value(&content_md5)?);
            }
            if let Some(content_secret) = options.content_secret.or(pending.content_secret) {
                header_map.insert(CONTENT_SECRET, header_value(&content_secret)?);
            }

            // Body::sized advertises the Content-Length.
            body = Some(source.into_body());
        }

        let date = signer::http_date(Timestamp::now());
        let credentials = &self.config.credentials;
        let authorization = signer::authorization(
            credentials.operator(),
            method.as_str(),
            &uri,
            &date,
            length,
            credentials.password_md5(),
        );
        header_map.insert(DATE, header_value(&date)?);
        header_map.insert(AUTHORIZATION, header_value(&authorization)?);

        if self.config.debug {
            debug!(target: TRACING_TARGET_WIRE, method = %method, url = %url, length, "Request");
            for (name, value) in &header_map {
                if *name == AUTHORIZATION {
                    continue;
                }
                debug!(target: TRACING_TARGET_WIRE, header = %name, value = ?value, "Request header");
            }
        }

        let mut request = self.http.request(method.clone(), &url).headers(header_map);
        if let Some(body) = body {
            request = request.body(body);
        }

        let start = Instant::now();
        let mut response = request.send().map_err(|e| {
            warn!(
                target: TRACING_TARGET_OPERATIONS,
                error = %e,
                elapsed = ?start.elapsed(),
                "Request failed"
            );
            Error::Transport(e)
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(
                target: TRACING_TARGET_OPERATIONS,
                status = status.as_u16(),
                elapsed = ?start.elapsed(),
                "Request rejected"
            );
            return Err(Error::status(status));
        }

        let mut vendor_headers = HashMap::new();
        for (name, value) in response.headers() {
            if !name.as_str().contains(VENDOR_HEADER_PREFIX) {
                continue;
            }
            if let Ok(value) = value.to_str() {
                if self.config.debug {
                    debug!(target: TRACING_TARGET_WIRE, header = %name, value, "Response header");
                }
                vendor_headers.insert(name.as_str().to_string(), value.to_string());
            }
        }
        self.response_headers = Some(vendor_headers);

        let result = match mode {
            ResponseMode::Stream(Some(sink)) => {
                let copied = io::copy(&mut response, sink)?;
                debug!(target: TRACING_TARGET_OPERATIONS, bytes = copied, "Response streamed");
                String::new()
            }
            ResponseMode::Stream(None) => return Err(Error::MissingSink),
            ResponseMode::Text => response.text()?,
        };

        debug!(
            target: TRACING_TARGET_OPERATIONS,
            status = status.as_u16(),
            elapsed = ?start.elapsed(),
            "Request completed"
        );

        Ok(result)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("Invalid header value {value:?}: {e}")))
}

impl std::fmt::Debug for UpyunClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpyunClient")
            .field("bucket", &self.config.bucket)
            .field("api_domain", &self.config.api_domain)
            .field("timeout", &self.config.timeout)
            .field("debug", &self.config.debug)
            .field("operator", &self.config.credentials.operator_masked())
            .finish_non_exhaustive()
    }
}
