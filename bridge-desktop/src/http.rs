//! HTTP Client Implementation using Reqwest

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpStreamResponse},
};
use futures_util::{StreamExt, TryStreamExt};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Reqwest-based HTTP client implementation
///
/// Provides HTTP operations with:
/// - Connection pooling via reqwest
/// - TLS support by default
/// - Streamed response bodies for large downloads
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP client with a connect timeout
    ///
    /// No overall timeout is applied at the client level: downloads can run
    /// for a long time, so per-request timeouts come from `HttpRequest`.
    pub fn with_timeout(connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(10)
            .user_agent(concat!("drive-recv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BridgeError::NotAvailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Convert bridge HttpMethod to reqwest Method
    fn convert_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
        }
    }

    /// Build reqwest request from bridge request
    fn build_request(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let method = Self::convert_method(request.method);
        let mut req = self.client.request(method, &request.url);

        for (key, value) in request.headers {
            req = req.header(key, value);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        req
    }

    /// Send the request and translate transport failures
    async fn send(&self, request: HttpRequest) -> Result<reqwest::Response> {
        debug!(url = %request.url, method = ?request.method, "Executing HTTP request");

        self.build_request(request).send().await.map_err(|e| {
            warn!(error = %e, "HTTP request failed");
            Self::map_error(e)
        })
    }

    fn map_error(e: reqwest::Error) -> BridgeError {
        if e.is_timeout() {
            BridgeError::OperationFailed("Request timed out".to_string())
        } else if e.is_connect() {
            BridgeError::OperationFailed(format!("Connection failed: {}", e))
        } else {
            BridgeError::OperationFailed(e.to_string())
        }
    }

    fn collect_headers(response: &reqwest::Response) -> HashMap<String, String> {
        response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
            .collect()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let headers = Self::collect_headers(&response);

        let body = response.bytes().await.map_err(Self::map_error)?;

        debug!(status, size = body.len(), "HTTP response received");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    async fn execute_stream(&self, request: HttpRequest) -> Result<HttpStreamResponse> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let headers = Self::collect_headers(&response);

        debug!(status, "HTTP response headers received, streaming body");
        let body = response.bytes_stream().map_err(Self::map_error).boxed();

        Ok(HttpStreamResponse {
            status,
            headers,
            body,
        })
    }
}
