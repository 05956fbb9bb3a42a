//! The Mapbox client and its request pipeline.

use crate::{HttpTransport, MapboxConfig};
use mapbox_core::QueryParams;
use mapbox_error::{ConfigError, JsonError, MapboxResult};
use mapbox_rate_limit::{Bucket, RateLimitRegistry, ResponseInterpreter};
use reqwest::header::{CONTENT_TYPE, HeaderValue, REFERER};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

/// Async client for the Mapbox web API.
///
/// Cloning is cheap and every clone shares one rate-limit registry, so a
/// 429 seen by any clone blocks the whole bucket for all of them.
///
/// Every call first checks its bucket. A blocked bucket fails immediately
/// with a rate-limit error and nothing is sent.
///
/// # Example
///
/// ```no_run
/// use mapbox_client::{Client, MapboxConfig};
/// use mapbox_core::{Coordinate, ReverseGeocodeRequest};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(MapboxConfig::load()?)?;
/// let places = client
///     .reverse_geocode(&ReverseGeocodeRequest::new(Coordinate::new(48.8584, 2.2945)))
///     .await?;
/// println!("{} results", places.features.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn HttpTransport>,
    interpreter: ResponseInterpreter,
    api_key: String,
    referer: Option<HeaderValue>,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url)
            .field("referer", &self.referer)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client sending requests with `reqwest`.
    ///
    /// # Errors
    ///
    /// Fails when the API key is empty, the base URL is not a URL, or the
    /// referer is not a valid header value.
    #[instrument(skip(config), fields(base_url = %config.base_url()))]
    pub fn new(config: MapboxConfig) -> MapboxResult<Self> {
        Self::with_transport(config, Arc::new(reqwest::Client::new()))
    }

    /// Client sending requests through `transport`.
    ///
    /// # Errors
    ///
    /// Same as [`Client::new`].
    pub fn with_transport(
        config: MapboxConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> MapboxResult<Self> {
        if config.api_key().is_empty() {
            return Err(ConfigError::new("missing Mapbox API key").into());
        }

        let base_url = config.base_url().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            ConfigError::new(format!("Invalid base URL '{}': {}", config.base_url(), e))
        })?;

        let referer = config
            .referer()
            .as_deref()
            .filter(|r| !r.is_empty())
            .map(HeaderValue::from_str)
            .transpose()
            .map_err(|e| ConfigError::new(format!("Invalid referer: {}", e)))?;

        debug!("Creating new Mapbox client");
        Ok(Self {
            transport,
            interpreter: ResponseInterpreter::new(Arc::new(RateLimitRegistry::new())),
            api_key: config.api_key().clone(),
            referer,
            base_url,
            timeout: config.timeout(),
        })
    }

    /// Use `registry` instead of a fresh one, e.g. to share it between
    /// independently configured clients.
    pub fn with_registry(mut self, registry: Arc<RateLimitRegistry>) -> Self {
        self.interpreter = ResponseInterpreter::new(registry);
        self
    }

    /// The registry shared by all clones of this client.
    pub fn rate_limits(&self) -> &Arc<RateLimitRegistry> {
        self.interpreter.registry()
    }

    /// Build the URL for `path` with `query` and the access token.
    pub(crate) fn url(&self, path: &str, mut query: QueryParams) -> MapboxResult<Url> {
        query.set("access_token", self.api_key.as_str());

        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ConfigError::new(format!("Invalid request path '{}': {}", path, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }
        Ok(url)
    }

    /// Build a request for `path`.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        query: QueryParams,
    ) -> MapboxResult<reqwest::Request> {
        let mut request = reqwest::Request::new(method, self.url(path, query)?);
        *request.timeout_mut() = Some(self.timeout);
        if let Some(referer) = &self.referer {
            request.headers_mut().insert(REFERER, referer.clone());
        }
        Ok(request)
    }

    /// Check the bucket, send, interpret.
    #[instrument(skip(self, request), fields(bucket = %bucket, method = %request.method(), path = %request.url().path()))]
    async fn send<T: DeserializeOwned>(
        &self,
        bucket: Bucket,
        request: reqwest::Request,
    ) -> MapboxResult<T> {
        self.rate_limits().check_blocked(bucket).await?;

        debug!("Sending request to Mapbox API");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status().as_u16(), "Received response");

        self.interpreter.handle(response, bucket).await
    }

    /// `GET path?query` in `bucket`.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        bucket: Bucket,
        path: &str,
        query: QueryParams,
    ) -> MapboxResult<T> {
        let request = self.request(Method::GET, path, query)?;
        self.send(bucket, request).await
    }

    /// `POST path` with a JSON body in `bucket`.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        bucket: Bucket,
        path: &str,
        body: &B,
    ) -> MapboxResult<T> {
        let body = serde_json::to_vec(body)
            .map_err(|e| JsonError::new("request body", e.to_string()))?;

        let mut request = self.request(Method::POST, path, QueryParams::new())?;
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());
        self.send(bucket, request).await
    }
}
