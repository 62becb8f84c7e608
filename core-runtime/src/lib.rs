//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the Drive receive core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the provider crates depend on.
//! It establishes the logging conventions and the fail-fast configuration
//! builder that wires bridge implementations together.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
