//! API endpoints.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The four API hosts offered by the service.
///
/// The hosts differ only in network routing; the client treats them
/// identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ApiEndpoint {
    /// Automatic carrier detection.
    #[default]
    Auto,
    /// China Telecom.
    Telecom,
    /// China Unicom (CNC).
    Cnc,
    /// China Mobile (CTT).
    Ctt,
}

impl ApiEndpoint {
    /// Returns the host name of this endpoint.
    pub const fn host(&self) -> &'static str {
        match self {
            Self::Auto => "v0.api.upyun.com",
            Self::Telecom => "v1.api.upyun.com",
            Self::Cnc => "v2.api.upyun.com",
            Self::Ctt => "v3.api.upyun.com",
        }
    }
}

impl From<ApiEndpoint> for String {
    fn from(endpoint: ApiEndpoint) -> Self {
        endpoint.host().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_hosts() {
        assert_eq!(ApiEndpoint::default().host(), "v0.api.upyun.com");
        assert_eq!(ApiEndpoint::Telecom.host(), "v1.api.upyun.com");
        assert_eq!(ApiEndpoint::Cnc.host(), "v2.api.upyun.com");
        assert_eq!(ApiEndpoint::Ctt.host(), "v3.api.upyun.com");
        assert_eq!(String::from(ApiEndpoint::Ctt), "v3.api.upyun.com");
    }

    #[test]
    fn test_hosts_are_distinct() {
        let hosts: std::collections::HashSet<_> =
            ApiEndpoint::iter().map(|endpoint| endpoint.host()).collect();
        assert_eq!(hosts.len(), 4);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ApiEndpoint::from_str("auto").unwrap(), ApiEndpoint::Auto);
        assert_eq!(ApiEndpoint::from_str("cnc").unwrap(), ApiEndpoint::Cnc);
        assert_eq!(ApiEndpoint::Telecom.to_string(), "telecom");
        assert!(ApiEndpoint::from_str("v0.api.upyun.com").is_err());
    }
}
