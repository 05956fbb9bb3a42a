//! Retry classification for callers that implement their own retry policy.

/// Trait for errors that know whether a retry could succeed.
///
/// Nothing in this workspace retries automatically; this only answers the
/// question for callers.
///
/// # Examples
///
/// ```
/// use mapbox_error::{ApiError, AuthError, MapboxError, RetryableError};
///
/// let throttled: MapboxError = ApiError::new(429, "Too Many Requests").into();
/// assert!(throttled.is_retryable());
///
/// let unauthorized: MapboxError = AuthError::unauthorized().into();
/// assert!(!unauthorized.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    ///
    /// Rate limits (local or remote), 5xx responses, and request failures
    /// are retryable. Authentication, other 4xx, configuration and decoding
    /// failures are not.
    fn is_retryable(&self) -> bool;
}
