//! Mapbox - typed client for the Mapbox web API
//!
//! Wraps geocoding v6, directions v5, directions matrix v1 and search box
//! reverse lookups behind strongly typed requests and responses. Calls are
//! grouped into rate-limit buckets: when Mapbox answers `429 Too Many
//! Requests`, every later call in that bucket fails locally until the reset
//! time the API announced.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mapbox::{Client, Coordinate, MapboxConfig, ReverseGeocodeRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(MapboxConfig::load()?)?;
//!
//!     let request = ReverseGeocodeRequest::new(Coordinate::new(40.748817, -73.985428));
//!     let response = client.reverse_geocode(&request).await?;
//!     println!("{} features", response.features.len());
//!     Ok(())
//! }
//! ```
//!
//! # Retrying
//!
//! The client never retries on its own. Callers that want to can ask a
//! [`MapboxError`] through [`RetryableError::is_retryable`]: rate limits,
//! 5xx responses and failed sends say yes, auth and other 4xx errors say no.
//! [`RateLimitRegistry::blocked_until`] returns when a blocked bucket reopens.
//!
//! ```rust
//! use mapbox::{ApiError, AuthError, MapboxError, RetryableError};
//!
//! let unavailable: MapboxError = ApiError::bare(503).into();
//! assert!(unavailable.is_retryable());
//!
//! let unauthorized: MapboxError = AuthError::unauthorized().into();
//! assert!(!unauthorized.is_retryable());
//! ```
//!
//! # Architecture
//!
//! - `mapbox-error` - Error types
//! - `mapbox-core` - Requests, responses and query encoding
//! - `mapbox-rate-limit` - Per-bucket reset registry and response interpreter
//! - `mapbox-client` - Configuration, transport and endpoint methods
//!
//! This crate (`mapbox`) re-exports everything for convenience.

mod observability;

pub use mapbox_client::*;
pub use mapbox_core::*;
pub use mapbox_error::*;
pub use mapbox_rate_limit::*;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
