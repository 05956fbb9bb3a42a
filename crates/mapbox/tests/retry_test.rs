//! Retry classification of errors surfaced through the facade.

use chrono::TimeDelta;
use mapbox::{
    Bucket, Client, Clock, Coordinate, MapboxConfig, MapboxErrorKind, ReverseGeocodeRequest,
    RetryableError,
};

#[tokio::test]
async fn test_blocked_bucket_error_is_retryable() -> anyhow::Result<()> {
    let client = Client::new(MapboxConfig::new("test"))?;
    let registry = client.rate_limits();
    let reset_at = registry.clock().now() + TimeDelta::seconds(60);
    registry.record_reset(Bucket::Geocoding, reset_at).await;

    let err = client
        .reverse_geocode(&ReverseGeocodeRequest::new(Coordinate::new(40.7, -73.9)))
        .await
        .expect_err("bucket is blocked");

    assert!(err.is_local_rate_limit());
    assert!(err.is_retryable());
    assert!(matches!(err.kind(), MapboxErrorKind::RateLimited(_)));
    assert_eq!(registry.blocked_until(Bucket::Geocoding).await, Some(reset_at));
    Ok(())
}

#[test]
fn test_configuration_errors_are_not_retryable() {
    let err = Client::new(MapboxConfig::default()).expect_err("empty key is rejected");
    assert!(!err.is_retryable());
    assert!(matches!(err.kind(), MapboxErrorKind::Config(_)));
}
