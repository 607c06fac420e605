//! Upload sources and per-call upload options.

use std::fmt;
use std::fs::File;
use std::io::{self, Cursor, Read};

use bytes::Bytes;

/// A readable upload body with a known length.
///
/// The reader is streamed to the server as-is; the whole body is never held
/// in memory by the client.
pub struct UploadSource {
    reader: Box<dyn Read + Send>,
    length: u64,
}

impl UploadSource {
    /// Creates a source from any reader producing exactly `length` bytes.
    pub fn new(reader: impl Read + Send + 'static, length: u64) -> Self {
        Self {
            reader: Box::new(reader),
            length,
        }
    }

    /// Creates a source from an open file, taking the length from its metadata.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file metadata cannot be read.
    pub fn from_file(file: File) -> io::Result<Self> {
        let length = file.metadata()?.len();
        Ok(Self::new(file, length))
    }

    /// Returns the body length in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.length
    }

    /// Returns whether the body is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub(crate) fn into_body(self) -> reqwest::blocking::Body {
        reqwest::blocking::Body::sized(self.reader, self.length)
    }
}

impl fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadSource")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl From<Vec<u8>> for UploadSource {
    fn from(data: Vec<u8>) -> Self {
        let length = data.len() as u64;
        Self::new(Cursor::new(data), length)
    }
}

impl From<Bytes> for UploadSource {
    fn from(data: Bytes) -> Self {
        let length = data.len() as u64;
        Self::new(Cursor::new(data), length)
    }
}

impl From<&'static [u8]> for UploadSource {
    fn from(data: &'static [u8]) -> Self {
        Self::new(data, data.len() as u64)
    }
}

impl From<String> for UploadSource {
    fn from(data: String) -> Self {
        Self::from(data.into_bytes())
    }
}

/// Options applied to a single upload.
///
/// Values left unset fall back to the pending one-shot values configured on
/// the client, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Create up to 10 levels of missing parent directories.
    pub auto_mkdir: bool,
    /// Hex MD5 the server verifies the body against (`406` on mismatch).
    pub content_md5: Option<String>,
    /// Access secret required to fetch the stored file.
    pub content_secret: Option<String>,
}

impl UploadOptions {
    /// Creates empty upload options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether missing parent directories are created.
    pub fn with_auto_mkdir(mut self, auto_mkdir: bool) -> Self {
        self.auto_mkdir = auto_mkdir;
        self
    }

    /// Sets the MD5 the server verifies the body against.
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    /// Sets the access secret of the stored file.
    pub fn with_content_secret(mut self, content_secret: impl Into<String>) -> Self {
        self.content_secret = Some(content_secret.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_source_lengths() {
        assert_eq!(UploadSource::from(vec![1u8, 2, 3]).len(), 3);
        assert_eq!(UploadSource::from(Bytes::from_static(b"hello")).len(), 5);
        assert_eq!(UploadSource::from(&b"abc"[..]).len(), 3);
        assert!(UploadSource::from(String::new()).is_empty());
    }

    #[test]
    fn test_source_from_file() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"0123456789").unwrap();

        let source = UploadSource::from_file(file).unwrap();
        assert_eq!(source.len(), 10);
        assert!(format!("{source:?}").contains("length: 10"));
    }

    #[test]
    fn test_options_builder() {
        let options = UploadOptions::new()
            .with_auto_mkdir(true)
            .with_content_md5("abc")
            .with_content_secret("bac");

        assert!(options.auto_mkdir);
        assert_eq!(options.content_md5.as_deref(), Some("abc"));
        assert_eq!(options.content_secret.as_deref(), Some("bac"));
    }
}
