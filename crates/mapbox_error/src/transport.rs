//! Transport-level failures: no status-coded answer from the server was obtained.

/// Kinds of transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TransportErrorKind {
    /// Building or sending the request failed (DNS, TLS, timeout, ...)
    #[display("Request failed: {}", _0)]
    Request(String),
    /// The response body could not be read
    #[display("Failed to read body: {}", _0)]
    Body(String),
    /// A success body could not be decoded into the expected schema
    #[display("Failed to decode body: {}", _0)]
    Decode(String),
}

/// Transport error with location tracking.
///
/// # Examples
///
/// ```
/// use mapbox_error::{TransportError, TransportErrorKind};
///
/// let err = TransportError::new(TransportErrorKind::Body("connection reset".to_string()));
/// assert!(format!("{}", err).contains("Failed to read body"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transport Error: {} at line {} in {}", kind, line, file)]
pub struct TransportError {
    /// The kind of error that occurred
    pub kind: TransportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TransportError {
    /// Create a new transport error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TransportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
