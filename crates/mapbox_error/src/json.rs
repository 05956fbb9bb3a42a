//! JSON encoding errors.

/// A value could not be encoded as JSON.
///
/// Raised for batch geocoding bodies and for printing decoded responses.
/// Decoding failures of API responses are transport errors instead.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: failed to encode {}: {} at line {} in {}", what, message, line, file)]
pub struct JsonError {
    /// What was being encoded, e.g. `batch geocode body`
    pub what: &'static str,
    /// The serializer's message
    pub message: String,
    line: u32,
    file: &'static str,
}

impl JsonError {
    /// Encoding failure for `what` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapbox_error::JsonError;
    ///
    /// let err = JsonError::new("batch geocode body", "key must be a string");
    /// assert!(err.to_string().contains("failed to encode batch geocode body"));
    /// ```
    #[track_caller]
    pub fn new(what: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            what,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
