//! Google Drive API connector implementation
//!
//! Implements [`DriveFilesApi`] for Google Drive API v3 over the
//! [`HttpClient`] bridge.

use async_trait::async_trait;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bytes::Bytes;
use core_runtime::config::{CoreConfig, DEFAULT_DRIVE_API_BASE, DEFAULT_REQUEST_TIMEOUT};
use futures::{StreamExt, TryStreamExt};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::api::{DriveByteStream, DriveFilesApi};
use crate::error::{GoogleDriveError, Result};
use crate::types::{ExportParams, FileList, GetParams, ListParams};

/// Drive's JSON error envelope
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Google Drive API connector
///
/// # Example
///
/// ```ignore
/// use provider_google_drive::{GoogleDriveConnector, DriveFilesApi, ListParams};
///
/// let connector = GoogleDriveConnector::new(http_client, access_token);
/// let list = connector
///     .list(ListParams::by_parent_and_name("folder-id", "notes.txt"))
///     .await?;
/// ```
pub struct GoogleDriveConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// OAuth 2.0 access token
    access_token: String,

    /// Drive API root, without a trailing slash
    api_base: String,

    /// Per-request timeout handed to the HTTP client
    request_timeout: Duration,
}

impl GoogleDriveConnector {
    /// Create a new Google Drive connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `access_token` - OAuth 2.0 access token with `drive.readonly` scope
    pub fn new(http_client: Arc<dyn HttpClient>, access_token: impl Into<String>) -> Self {
        Self {
            http_client,
            access_token: access_token.into(),
            api_base: DEFAULT_DRIVE_API_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Create a connector using the HTTP client and API settings of `config`
    pub fn from_config(config: &CoreConfig, access_token: impl Into<String>) -> Self {
        Self::new(Arc::clone(&config.http_client), access_token)
            .with_api_base(config.drive_api_base.clone())
            .with_request_timeout(config.request_timeout)
    }

    /// Point the connector at another API root, e.g. a local stand-in
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn request(&self, url: String) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, url)
            .bearer_token(&self.access_token)
            .timeout(self.request_timeout)
    }

    fn list_url(&self, params: &ListParams) -> String {
        format!(
            "{}/files?q={}&fields={}&pageSize={}",
            self.api_base,
            urlencoding::encode(&params.q),
            urlencoding::encode(&params.fields),
            params.page_size
        )
    }

    fn export_url(&self, params: &ExportParams) -> String {
        format!(
            "{}/files/{}/export?mimeType={}",
            self.api_base,
            urlencoding::encode(&params.file_id),
            urlencoding::encode(&params.mime_type)
        )
    }

    fn get_url(&self, params: &GetParams) -> String {
        format!(
            "{}/files/{}?alt={}",
            self.api_base,
            urlencoding::encode(&params.file_id),
            params.alt.as_str()
        )
    }

    /// Map a non-2xx status and its body to a provider error
    fn status_error(status: u16, body: &[u8]) -> GoogleDriveError {
        let message = serde_json::from_slice::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_string());

        warn!(status, message = %message, "Drive API request failed");

        match status {
            401 | 403 => GoogleDriveError::AuthenticationFailed(message),
            _ => GoogleDriveError::ApiError {
                status_code: status,
                message,
            },
        }
    }

    /// Issue a GET whose body is handed back unread
    ///
    /// A failed response is still classified by its status when the error
    /// body cannot be read.
    async fn open_stream(&self, url: String) -> Result<DriveByteStream> {
        let response = self.http_client.execute_stream(self.request(url)).await?;

        if !response.is_success() {
            let status = response.status;
            let body = match response.into_response().await {
                Ok(buffered) => buffered.body,
                Err(e) => {
                    debug!(status, error = %e, "Failed to read error body");
                    Bytes::new()
                }
            };
            return Err(Self::status_error(status, &body));
        }

        debug!(status = response.status, "Streaming response body");
        Ok(response.body.map_err(GoogleDriveError::from).boxed())
    }
}

#[async_trait]
impl DriveFilesApi for GoogleDriveConnector {
    #[instrument(skip(self), fields(q = %params.q))]
    async fn list(&self, params: ListParams) -> Result<FileList> {
        let response = self
            .http_client
            .execute(self.request(self.list_url(&params)).header("Accept", "application/json"))
            .await?;

        if !response.is_success() {
            return Err(Self::status_error(response.status, &response.body));
        }

        let list: FileList = serde_json::from_slice(&response.body).map_err(|e| {
            GoogleDriveError::ParseError(format!("Failed to parse files list response: {}", e))
        })?;

        debug!(count = list.files.len(), "Listed files");
        Ok(list)
    }

    #[instrument(skip(self), fields(file_id = %params.file_id, mime_type = %params.mime_type))]
    async fn export(&self, params: ExportParams) -> Result<DriveByteStream> {
        self.open_stream(self.export_url(&params)).await
    }

    #[instrument(skip(self), fields(file_id = %params.file_id, alt = params.alt.as_str()))]
    async fn get(&self, params: GetParams) -> Result<DriveByteStream> {
        self.open_stream(self.get_url(&params)).await
    }
}
