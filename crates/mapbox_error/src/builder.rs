//! Errors from assembling a request with its builder.

/// A request builder refused to build.
///
/// Carries the endpoint the request was meant for, so a rejected
/// `DirectionsRequestBuilder` reads differently from a rejected geocoding one.
///
/// # Examples
///
/// ```
/// use mapbox_error::BuilderError;
///
/// let err = BuilderError::new("directions", "`profile` must be initialized");
/// assert_eq!(err.request, "directions");
/// assert!(err.to_string().contains("Invalid directions request"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid {} request: {} at line {} in {}", request, message, line, file)]
pub struct BuilderError {
    /// Endpoint the request targets, e.g. `directions` or `forward geocode`
    pub request: &'static str,
    /// Reason reported by the builder
    pub message: String,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Builder rejection for `request` at the current location.
    #[track_caller]
    pub fn new(request: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            request,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
