//! HTTP Client Abstraction
//!
//! Provides async HTTP operations with either a fully buffered body or a
//! streamed one.

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::error::Result;

/// Single-pass sequence of body chunks, in arrival order
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Upper bound on the bytes [`HttpStreamResponse::into_response`] buffers
pub const MAX_BUFFERED_BODY: usize = 64 * 1024;

/// HTTP method types
///
/// Drive reads are plain GETs without a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// HTTP request builder
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            timeout: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn bearer_token(self, token: impl Into<String>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.into()))
    }

    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }
}

/// HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl HttpResponse {
    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP response whose body has not been read yet
pub struct HttpStreamResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: ByteStream,
}

impl HttpStreamResponse {
    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Drain the body into memory, keeping at most [`MAX_BUFFERED_BODY`] bytes.
    ///
    /// Meant for short error payloads; media bodies should be consumed
    /// chunk by chunk through `body`. Reading stops once the cap is reached.
    pub async fn into_response(self) -> Result<HttpResponse> {
        let mut body = self.body;
        let mut buffer = BytesMut::new();
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            let room = MAX_BUFFERED_BODY - buffer.len();
            if chunk.len() >= room {
                buffer.extend_from_slice(&chunk[..room]);
                break;
            }
            buffer.extend_from_slice(&chunk);
        }

        Ok(HttpResponse {
            status: self.status,
            headers: self.headers,
            body: buffer.freeze(),
        })
    }
}

impl fmt::Debug for HttpStreamResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpStreamResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Async HTTP client trait
///
/// Abstracts HTTP operations so the Drive provider never touches a concrete
/// HTTP stack. Implementations should handle connection pooling, TLS and
/// honour `HttpRequest::timeout`.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::http::{HttpClient, HttpRequest, HttpMethod};
///
/// async fn fetch_data(client: &dyn HttpClient) -> Result<String> {
///     let request = HttpRequest::new(HttpMethod::Get, "https://api.example.com/data")
///         .bearer_token("token");
///
///     let response = client.execute(request).await?;
///     Ok(String::from_utf8_lossy(&response.body).into_owned())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and buffer the whole body
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network connection fails
    /// - TLS validation fails
    /// - Request times out
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Execute an HTTP request and hand back the body as a chunk stream
    ///
    /// Non-2xx statuses are returned as responses, not errors; the caller
    /// decides whether to drain the body for an error message.
    async fn execute_stream(&self, request: HttpRequest) -> Result<HttpStreamResponse>;
}
