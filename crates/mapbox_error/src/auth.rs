//! Authentication errors.

/// The server rejected the access token (HTTP 401).
///
/// Terminal for the call: never retried and never touches rate-limit state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Auth Error: {} at line {} in {}", message, line, file)]
pub struct AuthError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The standard error for a 401 response.
    #[track_caller]
    pub fn unauthorized() -> Self {
        Self::new("unauthorized request. Provide Mapbox API key")
    }
}
