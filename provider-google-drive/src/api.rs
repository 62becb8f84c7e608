//! Remote Drive client seam
//!
//! The receive logic only talks to Drive through [`DriveFilesApi`], so it can
//! run against the HTTP connector or a test double.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::error::Result;
use crate::types::{ExportParams, FileList, GetParams, ListParams};

/// File content as a single-pass chunk stream
pub type DriveByteStream = BoxStream<'static, Result<Bytes>>;

/// The `files` collection of the Drive API
#[async_trait]
pub trait DriveFilesApi: Send + Sync {
    /// `files.list`
    async fn list(&self, params: ListParams) -> Result<FileList>;

    /// `files.export`, streaming the converted content
    async fn export(&self, params: ExportParams) -> Result<DriveByteStream>;

    /// `files.get`, streaming the content
    async fn get(&self, params: GetParams) -> Result<DriveByteStream>;
}
