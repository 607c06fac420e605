//! Bucket usage queries.

use reqwest::Method;
use tracing::{debug, instrument};

use crate::client::ResponseMode;
use crate::{Error, Result, TRACING_TARGET_OPERATIONS, UpyunClient};

impl UpyunClient {
    /// Returns the number of bytes used by the whole bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a number.
    pub fn get_bucket_usage(&mut self) -> Result<f64> {
        self.get_folder_usage("/")
    }

    /// Returns the number of bytes used under a folder.
    ///
    /// The path must end with a slash.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a number.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS)]
    pub fn get_folder_usage(&mut self, path: &str) -> Result<f64> {
        let body = self.execute(
            Method::GET,
            &format!("{path}?usage"),
            &[],
            None,
            ResponseMode::Text,
        )?;

        let usage = body
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::InvalidResponse(format!("usage {body:?} is not a number: {e}")))?;

        debug!(target: TRACING_TARGET_OPERATIONS, path = %path, usage, "Usage retrieved");
        Ok(usage)
    }
}
