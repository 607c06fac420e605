//! MD5 helpers used for password hashing, request signing and upload checksums.

use std::fs::File;
use std::io;
use std::path::Path;

use md5::{Digest, Md5};

/// Returns the lower-case hex MD5 digest of a string.
pub fn string_md5(s: &str) -> String {
    hex::encode(Md5::digest(s.as_bytes()))
}

/// Returns the lower-case hex MD5 digest of a local file.
///
/// The file is streamed through the hasher. The result is suitable for
/// [`UpyunClient::set_content_md5`](crate::UpyunClient::set_content_md5).
///
/// # Errors
///
/// Returns the I/O error if the file cannot be opened or read.
pub fn file_md5(path: impl AsRef<Path>) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_string_md5() {
        assert_eq!(string_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(string_md5("password"), "5f4dcc3b5aa765d61d8327deb882cf99");
    }

    #[test]
    fn test_file_md5_matches_string_md5() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"test test").unwrap();
        file.flush().unwrap();

        assert_eq!(file_md5(file.path()).unwrap(), string_md5("test test"));
    }

    #[test]
    fn test_file_md5_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = file_md5(dir.path().join("missing.jpg"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
