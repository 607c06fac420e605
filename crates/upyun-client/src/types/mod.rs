//! Value types exchanged with the UpYun API.

mod dir_entry;
mod endpoint;
mod file_info;
mod upload;

pub use dir_entry::{DirEntry, EntryKind, parse_listing};
pub use endpoint::ApiEndpoint;
pub use file_info::FileInfo;
pub use upload::{UploadOptions, UploadSource};

/// Prefix shared by every vendor-specific response header.
pub const VENDOR_HEADER_PREFIX: &str = "x-upyun";
