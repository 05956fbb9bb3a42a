//! Top-level error wrapper types.

use crate::{
    ApiError, AuthError, BuilderError, ConfigError, JsonError, RateLimitError, RetryableError,
    TransportError, TransportErrorKind,
};

/// Every failure the Mapbox client can report.
///
/// # Examples
///
/// ```
/// use mapbox_error::{MapboxError, ApiError};
///
/// let api_err = ApiError::new(500, "Internal Server Error");
/// let err: MapboxError = api_err.into();
/// assert!(format!("{}", err).contains("API Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MapboxErrorKind {
    /// HTTP 401
    #[from(AuthError)]
    Auth(AuthError),
    /// Local pre-flight rejection inside a reset window
    #[from(RateLimitError)]
    RateLimited(RateLimitError),
    /// Status-coded error from the API, including observed 429s
    #[from(ApiError)]
    Api(ApiError),
    /// No status-coded answer was obtained
    #[from(TransportError)]
    Transport(TransportError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// JSON encoding error
    #[from(JsonError)]
    Json(JsonError),
}

/// Mapbox error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mapbox_error::{ConfigError, MapboxResult};
///
/// fn might_fail() -> MapboxResult<()> {
///     Err(ConfigError::new("missing Mapbox API key"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mapbox Error: {}", _0)]
pub struct MapboxError(Box<MapboxErrorKind>);

impl MapboxError {
    /// Create a new error from a kind.
    pub fn new(kind: MapboxErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MapboxErrorKind {
        &self.0
    }

    /// Consume the wrapper and return the kind.
    pub fn into_kind(self) -> MapboxErrorKind {
        *self.0
    }

    /// HTTP status associated with this error, if any.
    ///
    /// Local rate-limit rejections report 429, mirroring the server.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            MapboxErrorKind::Auth(_) => Some(401),
            MapboxErrorKind::RateLimited(_) => Some(429),
            MapboxErrorKind::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// True for local rejections and for 429s observed from the server.
    pub fn is_rate_limited(&self) -> bool {
        match self.kind() {
            MapboxErrorKind::RateLimited(_) => true,
            MapboxErrorKind::Api(e) => e.is_rate_limited(),
            _ => false,
        }
    }

    /// True when the rejection happened locally without a network round trip.
    pub fn is_local_rate_limit(&self) -> bool {
        matches!(self.kind(), MapboxErrorKind::RateLimited(_))
    }

    /// True for HTTP 401.
    pub fn is_auth(&self) -> bool {
        matches!(self.kind(), MapboxErrorKind::Auth(_))
    }

    /// True for transport failures (send, body read, decode).
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), MapboxErrorKind::Transport(_))
    }
}

// Generic From implementation for any type that converts to MapboxErrorKind
impl<T> From<T> for MapboxError
where
    T: Into<MapboxErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

impl RetryableError for MapboxError {
    fn is_retryable(&self) -> bool {
        match self.kind() {
            MapboxErrorKind::RateLimited(_) => true,
            MapboxErrorKind::Api(e) => e.is_rate_limited() || e.is_server_error(),
            MapboxErrorKind::Transport(e) => matches!(
                e.kind,
                TransportErrorKind::Request(_) | TransportErrorKind::Body(_)
            ),
            _ => false,
        }
    }
}

/// Result type for Mapbox operations.
pub type MapboxResult<T> = std::result::Result<T, MapboxError>;
