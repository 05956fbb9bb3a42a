//! Per-bucket rate limit coordination.
//!
//! Mapbox groups endpoints into rate-limit buckets. When the API answers
//! `429 Too Many Requests` it announces, in `X-Rate-Limit-Reset`, when the
//! bucket opens again. This crate remembers that time and rejects further
//! calls for the bucket locally until it has passed, so blocked callers never
//! hit the network.
//!
//! - [`RateLimitRegistry`] holds one reset time per [`Bucket`].
//! - [`ResponseInterpreter`] turns an HTTP response into a typed result and
//!   feeds observed resets into the registry.
//!
//! # Examples
//!
//! ```
//! use mapbox_rate_limit::{Bucket, RateLimitRegistry};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let registry = RateLimitRegistry::new();
//! assert!(registry.check_blocked(Bucket::Geocoding).await.is_ok());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bucket;
mod clock;
mod interpreter;
mod registry;

pub use bucket::Bucket;
pub use clock::{Clock, ManualClock, SystemClock};
pub use interpreter::{RATE_LIMIT_RESET_HEADER, ResponseInterpreter, parse_reset};
pub use registry::RateLimitRegistry;
