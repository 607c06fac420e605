//! File metadata returned by HEAD requests.

use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

const FILE_TYPE_HEADER: &str = "x-upyun-file-type";
const FILE_SIZE_HEADER: &str = "x-upyun-file-size";
const FILE_DATE_HEADER: &str = "x-upyun-file-date";

/// Metadata of a stored file or folder.
///
/// Fields the server did not send are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Entry type as reported by the server (`file` or `folder`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Creation time in unix seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
}

impl FileInfo {
    /// Extracts file metadata from captured vendor headers.
    pub(crate) fn from_headers(headers: &HashMap<String, String>) -> Self {
        Self {
            file_type: headers.get(FILE_TYPE_HEADER).cloned(),
            size: headers.get(FILE_SIZE_HEADER).and_then(|v| v.trim().parse().ok()),
            date: headers.get(FILE_DATE_HEADER).and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Returns whether no metadata field was present.
    pub fn is_empty(&self) -> bool {
        self.file_type.is_none() && self.size.is_none() && self.date.is_none()
    }

    /// Returns the creation time, if present and valid.
    pub fn modified_at(&self) -> Option<Timestamp> {
        self.date.and_then(|date| Timestamp::from_second(date).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_headers() {
        let headers = HashMap::from([
            (FILE_TYPE_HEADER.to_string(), "file".to_string()),
            (FILE_SIZE_HEADER.to_string(), "2048".to_string()),
            (FILE_DATE_HEADER.to_string(), "1136214245".to_string()),
            ("x-upyun-width".to_string(), "640".to_string()),
        ]);

        let info = FileInfo::from_headers(&headers);
        assert_eq!(info.file_type.as_deref(), Some("file"));
        assert_eq!(info.size, Some(2048));
        assert_eq!(info.date, Some(1_136_214_245));
        assert!(info.modified_at().is_some());
        assert!(!info.is_empty());
    }

    #[test]
    fn test_missing_headers_are_omitted() {
        let headers = HashMap::from([(FILE_TYPE_HEADER.to_string(), "folder".to_string())]);
        let info = FileInfo::from_headers(&headers);
        assert_eq!(info.file_type.as_deref(), Some("folder"));
        assert_eq!(info.size, None);
        assert_eq!(info.date, None);

        assert!(FileInfo::from_headers(&HashMap::new()).is_empty());
    }
}
