//! The seam between the client and the network.

use async_trait::async_trait;
use mapbox_error::{TransportError, TransportErrorKind};
use tracing::error;

/// Sends a fully built request and returns the raw response.
///
/// `reqwest::Client` is the production implementation. Anything that can
/// answer a `reqwest::Request` with a `reqwest::Response` (a recorder, a
/// canned-response script) can stand in for it.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Send `request`.
    ///
    /// # Errors
    ///
    /// A [`TransportError`] when no response was received.
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        reqwest::Client::execute(self, request).await.map_err(|e| {
            error!(error = ?e, "Failed to send request to Mapbox API");
            TransportError::new(TransportErrorKind::Request(e.to_string()))
        })
    }
}
