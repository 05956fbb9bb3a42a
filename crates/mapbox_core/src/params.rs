//! Closed vocabularies for request parameters and response fields.
//!
//! Each enum renders to the exact token the API uses, via `Display`,
//! `AsRef<str>`, serde and `FromStr`.

use serde::{Deserialize, Serialize};

/// Routing profile for directions and matrix requests.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Profile {
    /// Car routing
    #[default]
    #[serde(rename = "mapbox/driving")]
    #[strum(serialize = "mapbox/driving")]
    Driving,
    /// Pedestrian routing
    #[serde(rename = "mapbox/walking")]
    #[strum(serialize = "mapbox/walking")]
    Walking,
    /// Bicycle routing
    #[serde(rename = "mapbox/cycling")]
    #[strum(serialize = "mapbox/cycling")]
    Cycling,
    /// Car routing with live traffic
    #[serde(rename = "mapbox/driving-traffic")]
    #[strum(serialize = "mapbox/driving-traffic")]
    DrivingTraffic,
}

/// Per-segment metadata requested alongside a route or matrix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Annotation {
    /// Travel time
    Duration,
    /// Distance travelled
    Distance,
    /// Speed
    Speed,
    /// Traffic congestion level
    Congestion,
}

/// Side of the road from which to approach a waypoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Approach {
    /// Either side of the road
    Unrestricted,
    /// The side of the road matching the driving side
    Curb,
}

/// Kind of geographic feature returned by (or filtered in) search endpoints.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeatureType {
    /// Country
    Country,
    /// First-order administrative division
    Region,
    /// Postal code
    Postcode,
    /// Second-order administrative division
    District,
    /// City, town or village
    Place,
    /// Official sub-city feature
    Locality,
    /// Colloquial sub-city feature
    Neighborhood,
    /// Street
    Street,
    /// Japanese block
    Block,
    /// Individual residential or business address
    Address,
    /// Unit, suite or floor within an address
    SecondaryAddress,
    /// Point of interest
    Poi,
    /// Notable point of interest
    #[serde(rename = "poi.landmark")]
    #[strum(serialize = "poi.landmark")]
    PoiLandmark,
    /// Any type this client does not know about
    #[serde(other)]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// Road classes a route may avoid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Exclude {
    /// Motorways
    Motorway,
    /// Toll roads
    Toll,
    /// Ferries
    Ferry,
    /// Unpaved roads
    Unpaved,
    /// Toll roads that only accept cash
    CashOnlyTolls,
}

/// Geometry encoding for returned routes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Geometries {
    /// GeoJSON LineString
    #[serde(rename = "geojson")]
    #[strum(serialize = "geojson")]
    GeoJson,
    /// Polyline with 5 decimal precision
    Polyline,
    /// Polyline with 6 decimal precision
    Polyline6,
}

/// Restricted lanes a route may use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Include {
    /// High-occupancy vehicle lanes, two or more occupants
    Hov2,
    /// High-occupancy vehicle lanes, three or more occupants
    Hov3,
    /// High-occupancy toll lanes
    Hot,
}

/// Level of detail of the route overview geometry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Overview {
    /// Most detailed geometry
    Full,
    /// Simplified geometry
    Simplified,
    /// No overview geometry
    False,
}

/// Unit system for voice instructions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VoiceUnits {
    /// Miles and feet
    Imperial,
    /// Kilometers and meters
    Metric,
}

/// Overall confidence of a geocoding match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchCodeConfidence {
    /// Every component matched
    Exact,
    /// High confidence
    High,
    /// Medium confidence
    Medium,
    /// Low confidence
    Low,
    /// Missing or unrecognized
    #[default]
    #[serde(other)]
    Unknown,
}

/// How one address component matched the query.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchCodeValue {
    /// Component matched
    Matched,
    /// Component did not match
    Unmatched,
    /// Component was not part of the query
    NotApplicable,
    /// Component was inferred
    Inferred,
    /// Component is plausible but unverified
    Plausible,
    /// Missing or unrecognized
    #[default]
    #[serde(other)]
    Unknown,
}
