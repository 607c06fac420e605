//! Directory listing, creation and removal.

use reqwest::Method;
use tracing::{debug, info, instrument};

use crate::client::ResponseMode;
use crate::types::{DirEntry, parse_listing};
use crate::{Result, TRACING_TARGET_OPERATIONS, UpyunClient};

impl UpyunClient {
    /// Lists a directory.
    ///
    /// The path must end with a slash.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS)]
    pub fn read_dir(&mut self, path: &str) -> Result<Vec<DirEntry>> {
        let body = self.execute(Method::GET, path, &[], None, ResponseMode::Text)?;
        let entries = parse_listing(&body);

        debug!(
            target: TRACING_TARGET_OPERATIONS,
            path = %path,
            count = entries.len(),
            "Directory listed"
        );
        Ok(entries)
    }

    /// Creates a directory, and its missing parents with `auto_mkdir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS)]
    pub fn mkdir(&mut self, path: &str, auto_mkdir: bool) -> Result<()> {
        let mut headers = vec![("folder", "true")];
        if auto_mkdir {
            headers.push(("mkdir", "true"));
        }

        self.execute(Method::PUT, path, &headers, None, ResponseMode::Text)?;
        info!(target: TRACING_TARGET_OPERATIONS, path = %path, "Directory created");
        Ok(())
    }

    /// Removes a directory. The server refuses to remove non-empty ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS)]
    pub fn rmdir(&mut self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, &[], None, ResponseMode::Text)?;
        info!(target: TRACING_TARGET_OPERATIONS, path = %path, "Directory removed");
        Ok(())
    }
}
