//! Directory listing entries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Folder.
    Folder,
}

impl EntryKind {
    /// Decodes the listing flag: `N` marks a file, anything else a folder.
    fn from_flag(flag: &str) -> Self {
        if flag == "N" { Self::File } else { Self::Folder }
    }
}

/// One record of a directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Entry name, relative to the listed directory.
    pub name: String,
    /// Entry kind, unset when the record carried no flag.
    pub kind: Option<EntryKind>,
    /// Size in bytes.
    pub size: u64,
    /// Last modification time in unix seconds.
    pub time: i64,
}

impl DirEntry {
    /// Parses a single tab-separated listing record.
    ///
    /// Short or malformed records still produce an entry: numeric fields
    /// that are missing or unparsable default to zero.
    pub fn parse(record: &str) -> Self {
        let mut fields = record.trim().split('\t');

        let name = fields.next().unwrap_or_default().to_string();
        let kind = fields
            .next()
            .filter(|flag| !flag.is_empty())
            .map(EntryKind::from_flag);
        let size = fields.next().and_then(|v| v.parse().ok()).unwrap_or(0);
        let time = fields.next().and_then(|v| v.parse().ok()).unwrap_or(0);

        Self {
            name,
            kind,
            size,
            time,
        }
    }

    /// Returns whether this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind == Some(EntryKind::File)
    }

    /// Returns whether this entry is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == Some(EntryKind::Folder)
    }

    /// Returns the modification time, if it is a valid timestamp.
    pub fn modified_at(&self) -> Option<Timestamp> {
        Timestamp::from_second(self.time).ok()
    }
}

/// Parses a newline-separated listing body. Blank lines are skipped.
pub fn parse_listing(body: &str) -> Vec<DirEntry> {
    body.lines()
        .filter(|line| !line.trim().is_empty())
        .map(DirEntry::parse)
        .collect()
}
