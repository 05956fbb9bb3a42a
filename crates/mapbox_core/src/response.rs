//! Payloads shared by several endpoints.

use serde::{Deserialize, Serialize};

/// Error body returned with 4xx/5xx statuses.
///
/// ```
/// use mapbox_core::ErrorResponse;
///
/// let body: ErrorResponse = serde_json::from_str(r#"{"message":"Too Many Requests"}"#).unwrap();
/// assert_eq!(body.message, "Too Many Requests");
/// assert!(body.code.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Human readable message
    pub message: String,
    /// Machine readable code, e.g. `NoRoute`
    pub code: String,
}

/// Input coordinate snapped to the road network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Waypoint {
    /// Distance in meters from the input coordinate to the snapped location
    pub distance: f64,
    /// Name of the road the waypoint snapped to
    pub name: String,
    /// `[lng, lat]` of the snapped location
    pub location: Vec<f64>,
}
