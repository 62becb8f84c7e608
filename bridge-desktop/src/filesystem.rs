//! File System Access Implementation using Tokio

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::{FileSystemAccess, WriteStream},
};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Tokio-based file system implementation
#[derive(Debug, Default, Clone)]
pub struct TokioFileSystem {
    root: Option<PathBuf>,
}

impl TokioFileSystem {
    /// Create a file system accessor that resolves paths as given
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Create a file system accessor that resolves relative paths against `root`
    pub fn with_root(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Convert std::io::Error to BridgeError
    fn map_io_error(e: std::io::Error) -> BridgeError {
        BridgeError::Io(e)
    }
}

#[async_trait]
impl FileSystemAccess for TokioFileSystem {
    async fn create_write_stream(&self, path: &Path) -> Result<Box<dyn WriteStream>> {
        let path = self.resolve(path);

        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(Self::map_io_error)?;
        }

        let file = fs::File::create(&path).await.map_err(Self::map_io_error)?;
        debug!(path = ?path, "Opened file for writing");

        Ok(Box::new(TokioWriteStream {
            file,
            path,
            written: 0,
        }))
    }
}

/// Write destination backed by a `tokio::fs::File`
#[derive(Debug)]
pub struct TokioWriteStream {
    file: fs::File,
    path: PathBuf,
    written: u64,
}

#[async_trait]
impl WriteStream for TokioWriteStream {
    async fn write(&mut self, chunk: Bytes) -> Result<()> {
        self.file
            .write_all(&chunk)
            .await
            .map_err(TokioFileSystem::map_io_error)?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    async fn close(mut self: Box<Self>) -> Result<()> {
        self.file
            .shutdown()
            .await
            .map_err(TokioFileSystem::map_io_error)?;
        debug!(path = ?self.path, size = self.written, "Closed file");
        Ok(())
    }
}
