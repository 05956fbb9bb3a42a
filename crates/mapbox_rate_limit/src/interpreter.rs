//! Turning HTTP responses into typed results.

use crate::{Bucket, RateLimitRegistry};
use chrono::{DateTime, Utc};
use mapbox_core::ErrorResponse;
use mapbox_error::{
    ApiError, AuthError, MapboxResult, TransportError, TransportErrorKind,
};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Header carrying the Unix time, in seconds, at which a bucket reopens.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// Read the reset time announced by a 429 response.
///
/// Returns `None` when the header is missing or not an integer number of
/// seconds.
pub fn parse_reset(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let seconds: i64 = headers
        .get(RATE_LIMIT_RESET_HEADER)?
        .to_str()
        .ok()?
        .parse()
        .ok()?;
    DateTime::from_timestamp(seconds, 0)
}

/// Classifies responses and records server-announced rate limits.
#[derive(Debug, Clone)]
pub struct ResponseInterpreter {
    registry: Arc<RateLimitRegistry>,
}

impl ResponseInterpreter {
    /// Interpreter writing into `registry`.
    pub fn new(registry: Arc<RateLimitRegistry>) -> Self {
        Self { registry }
    }

    /// The registry observed resets are written to.
    pub fn registry(&self) -> &Arc<RateLimitRegistry> {
        &self.registry
    }

    /// Decode a successful response into `T` or map a failed one to an error.
    ///
    /// - 401 fails with an auth error before the body is read.
    /// - Other 4xx/5xx decode the `{message, code}` error body. A body that
    ///   does not decode gives an API error with an empty message.
    /// - A 429 whose reset header parses blocks `bucket` until that time.
    /// - Anything else is decoded as `T`.
    ///
    /// # Errors
    ///
    /// Auth, API or transport errors as described above.
    #[instrument(skip(self, response), fields(bucket = %bucket, status = response.status().as_u16()))]
    pub async fn handle<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        bucket: Bucket,
    ) -> MapboxResult<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("Request was not authorized");
            return Err(AuthError::unauthorized().into());
        }

        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            TransportError::new(TransportErrorKind::Body(e.to_string()))
        })?;

        if status.is_client_error() || status.is_server_error() {
            let error_body: ErrorResponse = match serde_json::from_slice(&body) {
                Ok(error_body) => error_body,
                Err(e) => {
                    debug!(error = %e, "Error body is not JSON");
                    return Err(ApiError::bare(status.as_u16()).into());
                }
            };

            if status == StatusCode::TOO_MANY_REQUESTS {
                match parse_reset(&headers) {
                    Some(reset_at) => {
                        warn!(reset_at = %reset_at, "Rate limited by the API");
                        self.registry.record_reset(bucket, reset_at).await;
                    }
                    None => warn!("Rate limited by the API without a usable reset header"),
                }
            }

            return Err(ApiError::new(status.as_u16(), error_body.message).into());
        }

        serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            TransportError::new(TransportErrorKind::Decode(e.to_string())).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            RATE_LIMIT_RESET_HEADER,
            HeaderValue::from_str(value).unwrap(),
        );
        headers
    }

    #[test]
    fn reset_header_is_unix_seconds() {
        let reset = parse_reset(&headers("1700000000")).unwrap();
        assert_eq!(reset.timestamp(), 1_700_000_000);
    }

    #[test]
    fn malformed_reset_headers_are_ignored() {
        assert_eq!(parse_reset(&HeaderMap::new()), None);
        assert_eq!(parse_reset(&headers("soon")), None);
        assert_eq!(parse_reset(&headers("1700000000.5")), None);
        assert_eq!(parse_reset(&headers("Tue, 14 Nov 2023 22:13:20 GMT")), None);
    }
}
