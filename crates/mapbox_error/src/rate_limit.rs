//! Local rate-limit rejections.

use std::time::Duration;

/// A request was rejected before reaching the network because its bucket is
/// still inside a reset window declared by an earlier 429 response.
///
/// Callers should treat this as "try again later".
///
/// # Examples
///
/// ```
/// use mapbox_error::RateLimitError;
/// use std::time::Duration;
///
/// let err = RateLimitError::new("geocoding", Duration::from_secs(2));
/// assert_eq!(err.message(), "Rate limiting geocoding requests");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "Rate Limit Error: Rate limiting {} requests (reset in {:?}) at line {} in {}",
    bucket,
    remaining,
    line,
    file
)]
pub struct RateLimitError {
    /// Name of the blocked bucket
    pub bucket: String,
    /// Time left until the server-declared reset
    pub remaining: Duration,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl RateLimitError {
    /// Create a new RateLimitError at the current location.
    #[track_caller]
    pub fn new(bucket: impl Into<String>, remaining: Duration) -> Self {
        let location = std::panic::Location::caller();
        Self {
            bucket: bucket.into(),
            remaining,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Message mirroring what the server would have answered.
    pub fn message(&self) -> String {
        format!("Rate limiting {} requests", self.bucket)
    }
}
