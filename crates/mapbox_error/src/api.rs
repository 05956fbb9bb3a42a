//! Status-coded errors reported by the Mapbox API.

/// Error response from the Mapbox API (any 4xx/5xx other than 401).
///
/// An empty `message` means the response body could not be decoded into the
/// structured `{message, code}` error document.
///
/// # Examples
///
/// ```
/// use mapbox_error::ApiError;
///
/// let err = ApiError::new(429, "Too Many Requests");
/// assert!(err.is_rate_limited());
/// assert!(format!("{}", err).contains("api error(429): Too Many Requests"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("API Error: api error({}): {} at line {} in {}", status, message, line, file)]
pub struct ApiError {
    /// HTTP status code returned by the server
    pub status: u16,
    /// Message from the error body, empty when the body was undecodable
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Create a new ApiError at the current location.
    #[track_caller]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            status,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an ApiError carrying only a status code.
    #[track_caller]
    pub fn bare(status: u16) -> Self {
        Self::new(status, "")
    }

    /// True when the server answered 429 Too Many Requests.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    /// True for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        (500..=599).contains(&self.status)
    }
}
