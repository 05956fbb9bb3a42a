//! Async client for the Mapbox web API.
//!
//! [`Client`] wraps geocoding v6, directions v5, directions matrix v1 and
//! search box reverse lookups. Calls are grouped into rate-limit buckets; once
//! the API answers 429 for a bucket, further calls in that bucket fail locally
//! until the announced reset time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod directions;
mod geocoding;
mod searchbox;
mod transport;

pub use client::Client;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MapboxConfig};
pub use transport::HttpTransport;
