//! Request and response types for the Mapbox API client.
//!
//! Requests are plain data with builders; each knows the path segment and the
//! query parameters it maps to. Responses are lenient serde models: absent
//! fields fall back to their defaults.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coordinate;
mod directions;
mod geocoding;
mod matrix;
mod params;
mod query;
mod response;
mod searchbox;

pub use coordinate::{BoundingBox, Coordinate, Coordinates};
pub use directions::{
    Admin, BannerInstruction, Component, DirectionsAnnotation, DirectionsRequest,
    DirectionsRequestBuilder, DirectionsResponse, Instruction, Intersection, Maneuver, MaxSpeed,
    Route, RouteLeg, Step, ViaWaypoint, VoiceInstruction,
};
pub use geocoding::{
    Context, ExtendedCoordinate, Feature, ForwardGeocodeRequest, ForwardGeocodeRequestBuilder,
    GEOCODE_BATCH_PATH, GeocodeBatchResponse, GeocodeResponse, Geometry, MatchCode, Properties,
    ReverseGeocodeRequest, ReverseGeocodeRequestBuilder, RoutablePoint,
};
pub use matrix::{DirectionsMatrixRequest, DirectionsMatrixRequestBuilder, DirectionsMatrixResponse};
pub use params::{
    Annotation, Approach, Exclude, FeatureType, Geometries, Include, MatchCodeConfidence,
    MatchCodeValue, Overview, Profile, VoiceUnits,
};
pub use query::{QueryParams, TIMESTAMP_FORMAT, format_timestamp};
pub use response::{ErrorResponse, Waypoint};
pub use searchbox::{
    SearchboxBrand, SearchboxFeature, SearchboxProperties, SearchboxReverseRequest,
    SearchboxReverseRequestBuilder, SearchboxReverseResponse,
};
