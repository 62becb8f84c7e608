//! # Core Configuration Module
//!
//! Provides configuration management for the Drive receive core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a `CoreConfig`
//! instance that holds the bridge implementations and the Drive API settings.
//! It enforces fail-fast validation so a missing capability is reported when
//! the configuration is built, not in the middle of a download.
//!
//! ## Dependencies (with platform defaults)
//!
//! - `HttpClient` - HTTP operations (desktop default: reqwest)
//! - `FileSystemAccess` - Write destinations (desktop default: tokio fs)
//!
//! When the `desktop-shims` feature is enabled, desktop-ready defaults are
//! injected automatically if not provided.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//! use std::time::Duration;
//!
//! let config = CoreConfig::builder()
//!     .request_timeout(Duration::from_secs(120))
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::{FileSystemAccess, HttpClient};
use std::sync::Arc;
use std::time::Duration;

/// Google Drive API v3 base URL
pub const DEFAULT_DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Default per-request timeout for Drive API calls
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Core configuration.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// HTTP client for Drive API requests
    pub http_client: Arc<dyn HttpClient>,

    /// File system used to open download destinations
    pub file_system: Arc<dyn FileSystemAccess>,

    /// Drive API base URL, without trailing slash
    pub drive_api_base: String,

    /// Timeout applied to each Drive API request
    pub request_timeout: Duration,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("http_client", &"HttpClient { ... }")
            .field("file_system", &"FileSystemAccess { ... }")
            .field("drive_api_base", &self.drive_api_base)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl CoreConfig {
    /// Creates a new builder for constructing a `CoreConfig`.
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.drive_api_base.trim().is_empty() {
            return Err(Error::Config("Drive API base URL cannot be empty".to_string()));
        }

        if !self.drive_api_base.starts_with("http://") && !self.drive_api_base.starts_with("https://")
        {
            return Err(Error::Config(format!(
                "Drive API base URL must be http(s): {}",
                self.drive_api_base
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(Error::Config(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_http_client() -> Result<Arc<dyn HttpClient>> {
    use bridge_desktop::ReqwestHttpClient;

    let client = ReqwestHttpClient::new().map_err(|e| Error::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: format!("Default reqwest client could not be created: {}", e),
    })?;
    let client: Arc<dyn HttpClient> = Arc::new(client);
    Ok(client)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_http_client() -> Result<Arc<dyn HttpClient>> {
    Err(Error::CapabilityMissing {
        capability: "HttpClient".to_string(),
        message: "No HTTP client implementation provided. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use ReqwestHttpClient. \
                 Other hosts: inject a platform-native adapter."
            .to_string(),
    })
}

#[cfg(feature = "desktop-shims")]
fn provide_default_file_system() -> Result<Arc<dyn FileSystemAccess>> {
    use bridge_desktop::TokioFileSystem;

    let fs: Arc<dyn FileSystemAccess> = Arc::new(TokioFileSystem::new());
    Ok(fs)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_file_system() -> Result<Arc<dyn FileSystemAccess>> {
    Err(Error::CapabilityMissing {
        capability: "FileSystemAccess".to_string(),
        message: "No file system implementation provided. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use TokioFileSystem. \
                 Other hosts: inject a platform-native adapter."
            .to_string(),
    })
}

/// Builder for constructing [`CoreConfig`] instances.
#[derive(Default)]
pub struct CoreConfigBuilder {
    http_client: Option<Arc<dyn HttpClient>>,
    file_system: Option<Arc<dyn FileSystemAccess>>,
    drive_api_base: Option<String>,
    request_timeout: Option<Duration>,
}

impl CoreConfigBuilder {
    /// Sets the HTTP client implementation.
    ///
    /// If not provided, the desktop default (reqwest-based) is used when the
    /// `desktop-shims` feature is enabled.
    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the file system access implementation.
    ///
    /// If not provided, the desktop default (tokio fs-based) is used when the
    /// `desktop-shims` feature is enabled.
    pub fn file_system(mut self, fs: Arc<dyn FileSystemAccess>) -> Self {
        self.file_system = Some(fs);
        self
    }

    /// Overrides the Drive API base URL.
    ///
    /// Default: [`DEFAULT_DRIVE_API_BASE`]. A trailing slash is removed.
    pub fn drive_api_base(mut self, base: impl Into<String>) -> Self {
        self.drive_api_base = Some(base.into());
        self
    }

    /// Sets the timeout applied to each Drive API request.
    ///
    /// Default: 60 seconds
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the final `CoreConfig`.
    ///
    /// # Errors
    ///
    /// - `Error::CapabilityMissing` if a bridge is absent and no desktop
    ///   default is compiled in
    /// - `Error::Config` if validation fails
    pub fn build(self) -> Result<CoreConfig> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => provide_default_http_client()?,
        };

        let file_system = match self.file_system {
            Some(fs) => fs,
            None => provide_default_file_system()?,
        };

        let drive_api_base = self
            .drive_api_base
            .unwrap_or_else(|| DEFAULT_DRIVE_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        let config = CoreConfig {
            http_client,
            file_system,
            drive_api_base,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        };

        config.validate()?;
        Ok(config)
    }
}
