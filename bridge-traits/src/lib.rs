//! # Host Bridge Traits
//!
//! Platform abstraction traits that the Drive receive core depends on.
//!
//! ## Overview
//!
//! This crate defines the contract between the download core and the
//! platform-specific implementations. Each trait represents a capability the
//! core requires but does not implement itself.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Buffered and streaming HTTP requests
//! - [`FileSystemAccess`](storage::FileSystemAccess) - Opens write destinations
//! - [`WriteStream`](storage::WriteStream) - Scoped, consume-on-close write handle
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate |
//! |----------|---------------------|
//! | Desktop  | `bridge-desktop`    |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should convert their native errors into it and keep the
//! original message intact.
//!
//! ## Thread Safety
//!
//! Bridge traits require `Send + Sync` (or `Send` for owned handles) so the
//! core can drive them from any Tokio task.
//!
//! ## Examples
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpStreamResponse, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyHttpClient;
//!
//! #[async_trait]
//! impl HttpClient for MyHttpClient {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         todo!()
//!     }
//!
//!     async fn execute_stream(&self, request: HttpRequest) -> Result<HttpStreamResponse> {
//!         todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod http;
pub mod storage;

pub use error::BridgeError;

pub use http::{ByteStream, HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpStreamResponse};
pub use storage::{FileSystemAccess, WriteStream};
