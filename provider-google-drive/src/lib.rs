//! # Google Drive Provider
//!
//! Receives a single file from Google Drive API v3 and writes it to disk.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`get_file_id`]: resolve a file name inside a parent folder to its ID
//! - [`download_file`]: stream a file through `files.export` (with format
//!   conversion) or `files.get?alt=media` into a local destination
//! - [`recv_file`]: resolve when needed, then download
//! - [`GoogleDriveConnector`]: the HTTP-backed [`DriveFilesApi`]
//! - [`DriveReceiver`]: a facade wiring both from a `CoreConfig`
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use provider_google_drive::{DriveReceiver, ReceiveRequest};
//!
//! let config = CoreConfig::builder().build()?;
//! let receiver = DriveReceiver::from_config(&config, access_token);
//!
//! let file_id = receiver
//!     .recv(&ReceiveRequest {
//!         parent_id: "folder-id".to_string(),
//!         src_file_name: "Quarterly report".to_string(),
//!         dest_file_name: "report.pdf".into(),
//!         dest_mime_type: "application/pdf".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

pub mod api;
pub mod connector;
pub mod error;
pub mod receiver;
pub mod recv;
pub mod types;

pub use api::{DriveByteStream, DriveFilesApi};
pub use connector::GoogleDriveConnector;
pub use error::{DownloadFileError, GetFileIdError, GoogleDriveError, Result};
pub use receiver::DriveReceiver;
pub use recv::{download_file, get_file_id, recv_file};
pub use types::{
    Alt, DownloadRequest, DriveFile, ExportParams, FileList, GetParams, ListParams,
    ReceiveRequest,
};
