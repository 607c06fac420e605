#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Tracing target constants for consistent logging
pub const TRACING_TARGET_CLIENT: &str = "upyun_client::client";
pub const TRACING_TARGET_OPERATIONS: &str = "upyun_client::operations";
pub const TRACING_TARGET_WIRE: &str = "upyun_client::wire";

pub mod client;
mod digest;
mod error;
pub mod operations;
pub mod signer;
pub mod types;

pub use crate::client::{UpyunClient, UpyunConfig, UpyunCredentials};
#[cfg(feature = "config")]
pub use crate::client::UpyunArgs;
pub use crate::digest::{file_md5, string_md5};
pub use crate::error::{Error, Result};
pub use crate::types::{
    ApiEndpoint, DirEntry, EntryKind, FileInfo, UploadOptions, UploadSource,
};

/// Returns the version of this client library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
