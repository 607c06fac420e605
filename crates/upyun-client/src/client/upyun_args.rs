//! Command-line and environment configuration.

use std::time::Duration;

use clap::Args;

use super::{UpyunConfig, UpyunCredentials};
use crate::types::ApiEndpoint;

/// UpYun client settings read from flags or `UPYUN_*` environment variables.
#[derive(Debug, Clone, Args)]
pub struct UpyunArgs {
    /// Bucket (storage space) name.
    #[arg(long = "upyun-bucket", env = "UPYUN_BUCKET")]
    pub bucket: String,

    /// Operator name.
    #[arg(long = "upyun-operator", env = "UPYUN_OPERATOR")]
    pub operator: String,

    /// Operator password; hashed when converted into a configuration.
    #[arg(long = "upyun-password", env = "UPYUN_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// API endpoint.
    #[arg(long = "upyun-endpoint", env = "UPYUN_ENDPOINT", default_value = "auto")]
    pub endpoint: ApiEndpoint,

    /// Request deadline in seconds.
    #[arg(long = "upyun-timeout", env = "UPYUN_TIMEOUT", default_value = "300")]
    pub timeout_secs: u64,

    /// Log every request and response header.
    #[arg(long = "upyun-debug", env = "UPYUN_DEBUG")]
    pub debug: bool,
}

impl From<UpyunArgs> for UpyunConfig {
    fn from(args: UpyunArgs) -> Self {
        let credentials = UpyunCredentials::new(args.operator, &args.password);
        UpyunConfig::new(args.bucket, credentials)
            .with_api_domain(args.endpoint)
            .with_timeout(Duration::from_secs(args.timeout_secs))
            .with_debug(args.debug)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        upyun: UpyunArgs,
    }

    #[test]
    fn test_args_into_config() {
        let cli = Cli::parse_from([
            "test",
            "--upyun-bucket",
            "bucket",
            "--upyun-operator",
            "operator",
            "--upyun-password",
            "password",
            "--upyun-endpoint",
            "telecom",
            "--upyun-timeout",
            "30",
        ]);

        let config = UpyunConfig::from(cli.upyun);
        assert_eq!(config.bucket, "bucket");
        assert_eq!(config.api_domain, "v1.api.upyun.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.credentials().password_md5(),
            "5f4dcc3b5aa765d61d8327deb882cf99"
        );
        assert!(!config.debug);
    }
}
