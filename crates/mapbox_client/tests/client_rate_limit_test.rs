//! End-to-end rate limit behaviour through the client.

mod test_utils;

use chrono::{TimeDelta, Utc};
use mapbox_core::{
    Coordinate, DirectionsRequest, GeocodeResponse, ReverseGeocodeRequest,
    ReverseGeocodeRequestBuilder,
};
use mapbox_error::{MapboxError, MapboxErrorKind};
use mapbox_rate_limit::{Bucket, Clock, ManualClock, RateLimitRegistry};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockResponse, RateLimitingTransport, ScriptedTransport, client_with};

fn reverse_request() -> ReverseGeocodeRequest {
    ReverseGeocodeRequestBuilder::default()
        .coordinate(Coordinate::new(123.1, 123.2))
        .language("en")
        .limit(1u32)
        .build()
        .expect("valid request")
}

fn api_message(err: &MapboxError) -> (u16, String) {
    match err.kind() {
        MapboxErrorKind::Api(api) => (api.status, api.message.clone()),
        other => panic!("expected API error, got: {other}"),
    }
}

#[tokio::test]
async fn test_rate_limits_block_then_recover() {
    let transport = RateLimitingTransport::new(2);
    let client = client_with(transport.clone());
    let request = reverse_request();

    client
        .reverse_geocode(&request)
        .await
        .expect("not rate limiting yet");

    transport.set_rate_limiting(true);
    let err = client
        .reverse_geocode(&request)
        .await
        .expect_err("API is rate limiting");
    assert_eq!(api_message(&err), (429, "Too Many Requests".to_string()));
    assert_eq!(transport.call_count(), 2);

    let err = client
        .reverse_geocode(&request)
        .await
        .expect_err("bucket is blocked locally");
    match err.kind() {
        MapboxErrorKind::RateLimited(limited) => {
            assert_eq!(limited.message(), "Rate limiting geocoding requests");
        }
        other => panic!("expected local rate limit, got: {other}"),
    }
    assert_eq!(err.status(), Some(429));
    assert_eq!(transport.call_count(), 2, "blocked call must not be sent");

    tokio::time::sleep(Duration::from_millis(2100)).await;
    transport.set_rate_limiting(false);
    client
        .reverse_geocode(&request)
        .await
        .expect("reset has passed");
    assert_eq!(transport.call_count(), 3);
    assert_eq!(client.rate_limits().blocked_until(Bucket::Geocoding).await, None);
}

#[tokio::test]
async fn test_block_is_scoped_to_bucket() {
    let transport = ScriptedTransport::new([
        MockResponse::status(429, r#"{"message":"Too Many Requests"}"#)
            .header("X-Rate-Limit-Reset", (Utc::now().timestamp() + 60).to_string()),
        MockResponse::ok(r#"{"code":"Ok","routes":[]}"#),
    ]);
    let client = client_with(transport.clone());

    assert!(client.reverse_geocode(&reverse_request()).await.is_err());
    assert!(client.rate_limits().blocked_until(Bucket::Geocoding).await.is_some());

    let routes = client
        .directions(&DirectionsRequest::default())
        .await
        .expect("directions bucket is open");
    assert_eq!(routes.code, "Ok");

    let err = client
        .forward_geocode(&Default::default())
        .await
        .expect_err("geocoding bucket is blocked");
    assert!(err.is_local_rate_limit());
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn test_clones_observe_each_others_limits() {
    let transport = RateLimitingTransport::new(60);
    let client = client_with(transport.clone());
    let clone = client.clone();

    transport.set_rate_limiting(true);
    assert!(client.reverse_geocode(&reverse_request()).await.is_err());

    let err = clone
        .reverse_geocode(&reverse_request())
        .await
        .expect_err("shared registry blocks the clone");
    assert!(err.is_local_rate_limit());
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_expiry_with_injected_clock() {
    let clock = ManualClock::default();
    let registry = Arc::new(RateLimitRegistry::with_clock(Arc::new(clock.clone())));
    let reset = clock.now() + TimeDelta::seconds(30);
    let transport = ScriptedTransport::new([
        MockResponse::status(429, r#"{"message":"Too Many Requests"}"#)
            .header("X-Rate-Limit-Reset", reset.timestamp().to_string()),
        MockResponse::ok("{}"),
    ]);
    let client = client_with(transport.clone()).with_registry(Arc::clone(&registry));

    assert!(client.reverse_geocode(&reverse_request()).await.is_err());
    assert!(
        client
            .reverse_geocode(&reverse_request())
            .await
            .expect_err("blocked")
            .is_local_rate_limit()
    );

    clock.advance(TimeDelta::seconds(31));
    client
        .reverse_geocode(&reverse_request())
        .await
        .expect("clock moved past the reset");
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn test_unauthorized_does_not_block() {
    let transport = ScriptedTransport::new([
        MockResponse::status(401, r#"{"message":"Not Authorized - Invalid Token"}"#),
        MockResponse::ok("{}"),
    ]);
    let client = client_with(transport.clone());

    let err = client
        .reverse_geocode(&reverse_request())
        .await
        .expect_err("401 must fail");
    assert!(err.is_auth());

    client
        .reverse_geocode(&reverse_request())
        .await
        .expect("auth failures do not block the bucket");
}

#[tokio::test]
async fn test_transport_failure_is_reported() {
    let transport = ScriptedTransport::new(Vec::<MockResponse>::new());
    let client = client_with(transport.clone());

    let err = client
        .reverse_geocode(&reverse_request())
        .await
        .expect_err("no response available");
    assert!(err.is_transport());
    assert_eq!(client.rate_limits().blocked_until(Bucket::Geocoding).await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_around_a_reset() {
    let transport = RateLimitingTransport::new(1);
    let client = client_with(transport.clone());

    transport.set_rate_limiting(true);
    let _ = client.reverse_geocode(&reverse_request()).await;
    transport.set_rate_limiting(false);

    let mut handles = Vec::new();
    for _ in 0..2 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let mut outcomes = Vec::new();
            for _ in 0..50 {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let result: Result<GeocodeResponse, MapboxError> =
                    client.reverse_geocode(&reverse_request()).await;
                outcomes.push(result.map(|_| ()).map_err(|e| e.is_local_rate_limit()));
            }
            outcomes
        }));
    }

    for handle in handles {
        let outcomes = handle.await.expect("task panicked");
        // Every failure is a local rejection, and once calls succeed they keep succeeding.
        assert!(outcomes.iter().all(|o| matches!(o, Ok(()) | Err(true))));
        let first_ok = outcomes.iter().position(Result::is_ok).expect("reset passed");
        assert!(outcomes[first_ok..].iter().all(Result::is_ok));
    }
    assert_eq!(client.rate_limits().blocked_until(Bucket::Geocoding).await, None);
}
