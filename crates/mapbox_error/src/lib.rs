//! Error types for the Mapbox client.
//!
//! This crate provides the error types shared by every crate in the workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use mapbox_error::{ApiError, MapboxResult};
//!
//! fn lookup() -> MapboxResult<String> {
//!     Err(ApiError::new(404, "Not Found"))?
//! }
//!
//! match lookup() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod auth;
mod builder;
mod config;
mod error;
mod json;
mod rate_limit;
mod retry;
mod transport;

pub use api::ApiError;
pub use auth::AuthError;
pub use builder::BuilderError;
pub use config::ConfigError;
pub use error::{MapboxError, MapboxErrorKind, MapboxResult};
pub use json::JsonError;
pub use rate_limit::RateLimitError;
pub use retry::RetryableError;
pub use transport::{TransportError, TransportErrorKind};
