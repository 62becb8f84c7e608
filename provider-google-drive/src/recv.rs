//! Resolve, download and receive
//!
//! [`recv_file`] resolves the file ID by name when the caller does not know
//! it, then streams the content into a local destination through
//! [`download_file`].

use bridge_traits::storage::{FileSystemAccess, WriteStream};
use core_runtime::logging::strip_path;
use futures::StreamExt;
use tracing::{debug, info, instrument, warn};

use crate::api::DriveFilesApi;
use crate::error::{DownloadFileError, GetFileIdError, Result};
use crate::types::{DownloadRequest, ExportParams, GetParams, ListParams, ReceiveRequest};

/// Look up the ID of the file named `src_file_name` directly under `parent_id`
///
/// When several files share the name, the first one returned by the API wins.
///
/// # Errors
///
/// - `GoogleDriveError::GetFileId` if no file matches
/// - the listing error, unchanged, if the listing call fails
#[instrument(skip(files))]
pub async fn get_file_id(
    files: &dyn DriveFilesApi,
    parent_id: &str,
    src_file_name: &str,
) -> Result<String> {
    let list = files
        .list(ListParams::by_parent_and_name(parent_id, src_file_name))
        .await?;

    match list.files.into_iter().next() {
        Some(file) => {
            debug!(file_id = %file.id, "Resolved file ID");
            Ok(file.id)
        }
        None => {
            warn!("No file matched the name lookup");
            Err(GetFileIdError {
                parent_id: parent_id.to_string(),
                file_name: src_file_name.to_string(),
            }
            .into())
        }
    }
}

/// Stream a file into `request.dest_file_name`
///
/// A non-empty `dest_mime_type` goes through `files.export` with that target
/// format, an empty one through `files.get` with `alt=media`. The destination
/// is opened before the remote call and closed exactly once afterwards,
/// whether the transfer succeeded or not.
///
/// # Errors
///
/// Every failure, remote or local, is reported as
/// `GoogleDriveError::DownloadFile` displaying the original message.
#[instrument(
    skip(files, fs, request),
    fields(
        file_id = %request.file_id,
        dest = %strip_path(&request.dest_file_name.to_string_lossy()),
        mime_type = %request.dest_mime_type
    )
)]
pub async fn download_file(
    files: &dyn DriveFilesApi,
    fs: &dyn FileSystemAccess,
    request: &DownloadRequest,
) -> Result<()> {
    let mut dest = fs
        .create_write_stream(&request.dest_file_name)
        .await
        .map_err(|e| DownloadFileError::new(&request.file_id, e))?;

    let transferred = transfer(files, request, dest.as_mut()).await;
    let closed = dest.close().await;

    match (transferred, closed) {
        (Ok(bytes), Ok(())) => {
            info!(bytes, "Download complete");
            Ok(())
        }
        (Ok(_), Err(close_error)) => {
            Err(DownloadFileError::new(&request.file_id, close_error).into())
        }
        (Err(error), closed) => {
            if let Err(close_error) = closed {
                warn!(error = %close_error, "Failed to close destination after download error");
            }
            Err(DownloadFileError::new(&request.file_id, error).into())
        }
    }
}

/// Pipe the remote content into `dest`, one chunk at a time
async fn transfer(
    files: &dyn DriveFilesApi,
    request: &DownloadRequest,
    dest: &mut dyn WriteStream,
) -> Result<u64> {
    let mut stream = if request.dest_mime_type.is_empty() {
        files.get(GetParams::media(&request.file_id)).await?
    } else {
        files
            .export(ExportParams::new(&request.file_id, &request.dest_mime_type))
            .await?
    };

    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        written += chunk.len() as u64;
        dest.write(chunk).await?;
    }

    Ok(written)
}

/// Receive a file, resolving its ID first when `request.file_id` is empty
///
/// Returns the ID that was downloaded. Errors from the lookup and the
/// download propagate unchanged.
#[instrument(skip(files, fs, request), fields(parent_id = %request.parent_id))]
pub async fn recv_file(
    files: &dyn DriveFilesApi,
    fs: &dyn FileSystemAccess,
    request: &ReceiveRequest,
) -> Result<String> {
    let file_id = if request.file_id.is_empty() {
        get_file_id(files, &request.parent_id, &request.src_file_name).await?
    } else {
        request.file_id.clone()
    };

    download_file(files, fs, &request.to_download(file_id.clone())).await?;

    Ok(file_id)
}
