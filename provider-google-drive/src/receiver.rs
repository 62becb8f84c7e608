//! Shareable handle bundling a Drive client and a file system

use bridge_traits::storage::FileSystemAccess;
use core_runtime::config::CoreConfig;
use std::sync::Arc;

use crate::api::DriveFilesApi;
use crate::connector::GoogleDriveConnector;
use crate::error::Result;
use crate::recv::{download_file, get_file_id, recv_file};
use crate::types::{DownloadRequest, ReceiveRequest};

/// Receives files from Drive into the local file system
///
/// Cheap to clone; concurrent downloads are fine as long as they target
/// distinct destination paths.
#[derive(Clone)]
pub struct DriveReceiver {
    files: Arc<dyn DriveFilesApi>,
    fs: Arc<dyn FileSystemAccess>,
}

impl DriveReceiver {
    pub fn new(files: Arc<dyn DriveFilesApi>, fs: Arc<dyn FileSystemAccess>) -> Self {
        Self { files, fs }
    }

    /// Wire a [`GoogleDriveConnector`] and the configured file system
    pub fn from_config(config: &CoreConfig, access_token: impl Into<String>) -> Self {
        let connector = GoogleDriveConnector::from_config(config, access_token);
        Self::new(Arc::new(connector), Arc::clone(&config.file_system))
    }

    /// See [`get_file_id`]
    pub async fn resolve(&self, parent_id: &str, src_file_name: &str) -> Result<String> {
        get_file_id(self.files.as_ref(), parent_id, src_file_name).await
    }

    /// See [`download_file`]
    pub async fn download(&self, request: &DownloadRequest) -> Result<()> {
        download_file(self.files.as_ref(), self.fs.as_ref(), request).await
    }

    /// See [`recv_file`]
    pub async fn recv(&self, request: &ReceiveRequest) -> Result<String> {
        recv_file(self.files.as_ref(), self.fs.as_ref(), request).await
    }
}
