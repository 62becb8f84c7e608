//! File System Abstractions
//!
//! Provides the platform-agnostic write destination used by downloads.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;

use crate::error::Result;

/// Exclusively owned write handle for a single destination file
///
/// Chunks are written in call order. `close` consumes the handle, so a
/// destination can be closed at most once; dropping a handle without closing
/// it leaves flushing up to the platform.
#[async_trait]
pub trait WriteStream: Send {
    /// Write one chunk, completing once the chunk has been handed to the
    /// platform
    async fn write(&mut self, chunk: Bytes) -> Result<()>;

    /// Flush outstanding data and release the destination
    async fn close(self: Box<Self>) -> Result<()>;
}

/// File system access trait
///
/// Abstracts file I/O operations to support different platforms:
/// - Desktop: Direct filesystem access
/// - Sandboxed hosts: app container directories
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::FileSystemAccess;
///
/// async fn save(fs: &dyn FileSystemAccess, data: Bytes) -> Result<()> {
///     let mut dest = fs.create_write_stream(Path::new("out.bin")).await?;
///     dest.write(data).await?;
///     dest.close().await
/// }
/// ```
#[async_trait]
pub trait FileSystemAccess: Send + Sync {
    /// Open a file for streaming writes
    ///
    /// The file is created if absent and truncated if present.
    async fn create_write_stream(&self, path: &Path) -> Result<Box<dyn WriteStream>>;
}
