//! File upload, download, metadata and deletion.

use std::io::Write;

use reqwest::Method;
use tracing::{debug, info, instrument};

use crate::client::ResponseMode;
use crate::types::{FileInfo, UploadOptions, UploadSource};
use crate::{Result, TRACING_TARGET_OPERATIONS, UpyunClient};

impl UpyunClient {
    /// Uploads a file, streaming it from `source`.
    ///
    /// With `auto_mkdir`, up to 10 levels of missing parent directories are
    /// created. Pending one-shot options set through
    /// [`set_content_md5`](Self::set_content_md5) and
    /// [`set_content_secret`](Self::set_content_secret) are sent and cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the upload.
    pub fn write_file(
        &mut self,
        path: &str,
        source: impl Into<UploadSource>,
        auto_mkdir: bool,
    ) -> Result<()> {
        let options = UploadOptions::new().with_auto_mkdir(auto_mkdir);
        self.write_file_with(path, source, options)
    }

    /// Uploads a file with explicit per-call options.
    ///
    /// Options left unset fall back to the pending one-shot values, which are
    /// cleared either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server rejects the upload.
    #[instrument(skip(self, source, options), target = TRACING_TARGET_OPERATIONS)]
    pub fn write_file_with(
        &mut self,
        path: &str,
        source: impl Into<UploadSource>,
        options: UploadOptions,
    ) -> Result<()> {
        let source = source.into();
        let size = source.len();
        let headers: &[(&'static str, &str)] = if options.auto_mkdir {
            &[("mkdir", "true")]
        } else {
            &[]
        };

        debug!(target: TRACING_TARGET_OPERATIONS, path = %path, size, "Uploading file");
        self.execute(
            Method::PUT,
            path,
            headers,
            Some((source, options)),
            ResponseMode::Text,
        )?;

        info!(target: TRACING_TARGET_OPERATIONS, path = %path, size, "File uploaded successfully");
        Ok(())
    }

    /// Returns a vendor header of the last successful response.
    ///
    /// After an upload to an image bucket this exposes `x-upyun-width`,
    /// `x-upyun-height`, `x-upyun-frames` and `x-upyun-file-type`. Returns
    /// `None` when the header was absent or no request succeeded yet.
    pub fn get_writed_file_info(&self, key: &str) -> Option<&str> {
        self.response_headers()?
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Downloads a file, streaming its content into `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or writing to the sink fails.
    #[instrument(skip(self, sink), target = TRACING_TARGET_OPERATIONS)]
    pub fn read_file<W: Write>(&mut self, path: &str, sink: &mut W) -> Result<()> {
        let sink: &mut dyn Write = sink;
        self.execute(
            Method::GET,
            path,
            &[],
            None,
            ResponseMode::Stream(Some(sink)),
        )?;
        Ok(())
    }

    /// Returns the metadata of a file or folder.
    ///
    /// Fields missing from the response are `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, e.g. `404` for a missing file.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS)]
    pub fn get_file_info(&mut self, path: &str) -> Result<FileInfo> {
        self.execute(Method::HEAD, path, &[], None, ResponseMode::Text)?;

        Ok(self
            .response_headers()
            .map(FileInfo::from_headers)
            .unwrap_or_default())
    }

    /// Deletes a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS)]
    pub fn delete_file(&mut self, path: &str) -> Result<()> {
        self.execute(Method::DELETE, path, &[], None, ResponseMode::Text)?;
        info!(target: TRACING_TARGET_OPERATIONS, path = %path, "File deleted");
        Ok(())
    }
}
