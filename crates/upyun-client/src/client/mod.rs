//! UpYun client with configuration, credentials and request execution.
//!
//! [`UpyunClient`] owns a blocking HTTP client, the per-instance settings and
//! the state carried between requests: the vendor headers of the last
//! successful response and the one-shot upload options.

#[cfg(feature = "config")]
mod upyun_args;
mod upyun_client;
mod upyun_config;
mod upyun_credentials;

#[cfg(feature = "config")]
pub use upyun_args::UpyunArgs;
pub use upyun_client::UpyunClient;
pub(crate) use upyun_client::ResponseMode;
pub use upyun_config::{DEFAULT_TIMEOUT, UpyunConfig};
pub use upyun_credentials::UpyunCredentials;
