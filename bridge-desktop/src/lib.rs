//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `HttpClient` using `reqwest`, with streamed response bodies
//! - `FileSystemAccess` using `tokio::fs`
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{ReqwestHttpClient, TokioFileSystem};
//!
//! #[tokio::main]
//! async fn main() -> bridge_traits::error::Result<()> {
//!     let http_client = ReqwestHttpClient::new()?;
//!     let fs = TokioFileSystem::new();
//!
//!     // Hand both to `CoreConfig::builder()`
//!     Ok(())
//! }
//! ```

mod filesystem;
mod http;

pub use filesystem::{TokioFileSystem, TokioWriteStream};
pub use http::ReqwestHttpClient;
