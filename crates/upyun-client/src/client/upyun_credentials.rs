//! UpYun operator credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digest::string_md5;

/// Operator credentials.
///
/// The password is hashed on construction and only the hash is kept; the
/// plain password cannot be recovered from this value.
#[derive(Clone, Serialize, Deserialize)]
pub struct UpyunCredentials {
    /// Operator (account) name.
    pub operator: String,

    /// Hex MD5 of the operator password.
    #[serde(skip_serializing)]
    password_md5: String,
}

impl UpyunCredentials {
    /// Creates credentials from an operator name and a plain password.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use upyun_client::UpyunCredentials;
    ///
    /// let credentials = UpyunCredentials::new("operator", "password");
    /// assert_eq!(credentials.password_md5(), "5f4dcc3b5aa765d61d8327deb882cf99");
    /// ```
    pub fn new(operator: impl Into<String>, password: &str) -> Self {
        Self {
            operator: operator.into(),
            password_md5: string_md5(password),
        }
    }

    /// Creates credentials from an already hashed password.
    pub fn from_password_md5(operator: impl Into<String>, password_md5: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            password_md5: password_md5.into(),
        }
    }

    /// Returns the operator name.
    #[inline]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Returns the hashed password.
    #[inline]
    pub fn password_md5(&self) -> &str {
        &self.password_md5
    }

    /// Returns a masked version of the operator name for logging.
    ///
    /// This shows only the first 3 characters followed by asterisks.
    pub fn operator_masked(&self) -> String {
        if self.operator.chars().count() <= 3 {
            "*".repeat(self.operator.chars().count())
        } else {
            let prefix: String = self.operator.chars().take(3).collect();
            format!("{prefix}***")
        }
    }
}

impl fmt::Debug for UpyunCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpyunCredentials")
            .field("operator", &self.operator_masked())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_hashed() {
        let creds = UpyunCredentials::new("operator", "password");
        assert_eq!(creds.operator(), "operator");
        assert_eq!(creds.password_md5(), string_md5("password"));
        assert_ne!(creds.password_md5(), "password");
    }

    #[test]
    fn test_from_password_md5() {
        let creds = UpyunCredentials::from_password_md5("operator", "abc");
        assert_eq!(creds.password_md5(), "abc");
    }

    #[test]
    fn test_operator_masking() {
        let creds = UpyunCredentials::new("operator", "secret");
        assert_eq!(creds.operator_masked(), "ope***");

        let short_creds = UpyunCredentials::new("op", "secret");
        assert_eq!(short_creds.operator_masked(), "**");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = UpyunCredentials::new("operator", "password");
        let debug_str = format!("{creds:?}");
        assert!(debug_str.contains("ope***"));
        assert!(!debug_str.contains("\"operator\""));
        assert!(!debug_str.contains(creds.password_md5()));
    }

    #[test]
    fn test_serialize_skips_password() {
        let creds = UpyunCredentials::new("operator", "password");
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("operator"));
        assert!(!json.contains(creds.password_md5()));
    }
}
