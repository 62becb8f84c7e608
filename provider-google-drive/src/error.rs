//! Error types for Google Drive provider

use thiserror::Error;

/// Google Drive provider errors
#[derive(Error, Debug)]
pub enum GoogleDriveError {
    /// Authentication failed or token is invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// API request returned an error
    #[error("Google Drive API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Name lookup matched nothing
    #[error(transparent)]
    GetFileId(#[from] GetFileIdError),

    /// Export, get or the local write failed
    #[error(transparent)]
    DownloadFile(#[from] DownloadFileError),

    /// Bridge error
    #[error(transparent)]
    BridgeError(#[from] bridge_traits::error::BridgeError),
}

/// Result type for Google Drive operations
pub type Result<T> = std::result::Result<T, GoogleDriveError>;

/// No file named `file_name` exists under `parent_id`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The source file not found")]
pub struct GetFileIdError {
    pub parent_id: String,
    pub file_name: String,
}

/// A download of `file_id` failed
///
/// Displays exactly like the wrapped failure. The wrapped failure is
/// reachable through [`DownloadFileError::inner`] only and is not reported as
/// `source()`, so error-chain printers do not repeat the message.
#[derive(Error, Debug)]
#[error("{inner}")]
pub struct DownloadFileError {
    file_id: String,
    inner: Box<GoogleDriveError>,
}

impl DownloadFileError {
    pub fn new(file_id: impl Into<String>, source: impl Into<GoogleDriveError>) -> Self {
        Self {
            file_id: file_id.into(),
            inner: Box::new(source.into()),
        }
    }

    /// ID of the file whose download failed
    pub fn file_id(&self) -> &str {
        &self.file_id
    }

    /// The failure that aborted the download
    pub fn inner(&self) -> &GoogleDriveError {
        &self.inner
    }
}

impl GoogleDriveError {
    /// Whether the error came from the name lookup finding nothing
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, GoogleDriveError::GetFileId(_))
    }

    /// Whether the error came from the download step
    pub fn is_download_error(&self) -> bool {
        matches!(self, GoogleDriveError::DownloadFile(_))
    }
}
