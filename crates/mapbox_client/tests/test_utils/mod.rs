//! Test utilities for client tests.
//!
//! Transports that never touch the network: one replays a script of canned
//! responses, the other answers 429 on demand like a throttled API.

#![allow(dead_code)]

use async_trait::async_trait;
use mapbox_client::{Client, HttpTransport, MapboxConfig};
use mapbox_error::{TransportError, TransportErrorKind};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What a test saw leaving the client.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: reqwest::Url,
    pub headers: reqwest::header::HeaderMap,
    pub body: Option<Vec<u8>>,
    pub timeout: Option<std::time::Duration>,
}

impl RecordedRequest {
    /// Path plus query, as a server would see it.
    pub fn request_uri(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or_default())
            .expect("request body is JSON")
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MockResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    fn into_response(self) -> reqwest::Response {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        reqwest::Response::from(builder.body(self.body).expect("valid mock response"))
    }
}

fn record(request: &reqwest::Request) -> RecordedRequest {
    RecordedRequest {
        method: request.method().to_string(),
        url: request.url().clone(),
        headers: request.headers().clone(),
        body: request
            .body()
            .and_then(|body| body.as_bytes())
            .map(<[u8]>::to_vec),
        timeout: request.timeout().copied(),
    }
}

/// Replays responses in order and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = MockResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("at least one request was sent")
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        self.requests.lock().unwrap().push(record(&request));
        let next = self.responses.lock().unwrap().pop_front();
        next.map(MockResponse::into_response).ok_or_else(|| {
            TransportError::new(TransportErrorKind::Request(
                "not enough scripted responses".to_string(),
            ))
        })
    }
}

/// Answers `{}` normally and 429 with a reset `reset_in_secs` ahead while
/// throttling.
#[derive(Debug)]
pub struct RateLimitingTransport {
    pub rate_limiting: AtomicBool,
    pub reset_in_secs: i64,
    calls: AtomicUsize,
}

impl RateLimitingTransport {
    pub fn new(reset_in_secs: i64) -> Arc<Self> {
        Arc::new(Self {
            rate_limiting: AtomicBool::new(false),
            reset_in_secs,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set_rate_limiting(&self, on: bool) {
        self.rate_limiting.store(on, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for RateLimitingTransport {
    async fn execute(&self, _request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = if self.rate_limiting.load(Ordering::SeqCst) {
            let reset = chrono::Utc::now().timestamp() + self.reset_in_secs;
            MockResponse::status(
                429,
                r#"{"message":"Too Many Requests","code":"too_many_requests"}"#,
            )
            .header("X-Rate-Limit-Reset", reset.to_string())
        } else {
            MockResponse::ok("{}")
        };
        Ok(response.into_response())
    }
}

/// Client with a test key talking to `transport`.
pub fn client_with(transport: Arc<dyn HttpTransport>) -> Client {
    Client::with_transport(MapboxConfig::new("test"), transport).expect("valid test config")
}
