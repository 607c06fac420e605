//! Error types for UpYun storage operations.

use thiserror::Error;

/// Specialized [`Result`] type for UpYun operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for UpYun storage operations.
///
/// Nothing in this crate retries: every variant is handed back to the caller
/// exactly as it was observed.
#[derive(Debug, Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised for invalid client settings, header values that cannot be sent,
    /// or when the HTTP client cannot be built.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network-level failure reported by the HTTP transport.
    ///
    /// This includes DNS and connection failures, timeouts, and errors while
    /// streaming a request or response body.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status other than `200 OK`.
    ///
    /// A `406 Not Acceptable` raised for a `Content-MD5` mismatch lands here
    /// like any other status.
    #[error("Unexpected status {status_code}: {reason}")]
    Status {
        /// HTTP status code.
        status_code: u16,
        /// Canonical reason phrase of the status.
        reason: String,
    },

    /// A download was requested without an output sink.
    #[error("Not set output sink")]
    MissingSink,

    /// The server answered `200 OK` but the body could not be interpreted.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local I/O failure on a caller-supplied source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a status error from a response status.
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        Error::Status {
            status_code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Returns the HTTP status code if this is a status error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns whether the server rejected the request with the given status.
    pub fn is_status(&self, code: u16) -> bool {
        self.status_code() == Some(code)
    }

    /// Returns whether this error originated in the HTTP transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns whether this error indicates a configuration issue.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}
