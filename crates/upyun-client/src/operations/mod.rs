//! Storage operations on an [`UpyunClient`](crate::UpyunClient).
//!
//! Each operation is a single signed request with a fixed method and path
//! shape, followed by parsing of the response body or headers:
//!
//! - **Bucket operations**: bucket and folder usage
//! - **File operations**: upload, download, metadata, deletion
//! - **Directory operations**: listing, creation, removal

mod bucket_operations;
mod directory_operations;
mod file_operations;
