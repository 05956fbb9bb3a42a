//! Directions v5: turn-by-turn routes between waypoints.

use crate::{
    Annotation, Approach, Coordinates, Exclude, Geometries, Include, Overview, Profile,
    QueryParams, VoiceUnits, Waypoint, format_timestamp,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A route request.
///
/// `profile` and `coordinates` are required by the API; everything else is
/// optional and omitted from the query when unset.
///
/// # Examples
///
/// ```
/// use mapbox_core::{Annotation, Coordinate, DirectionsRequestBuilder, Profile};
///
/// let request = DirectionsRequestBuilder::default()
///     .profile(Profile::Walking)
///     .coordinates(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)])
///     .annotations(vec![Annotation::Distance])
///     .build()
///     .unwrap();
/// assert_eq!(request.path(), "/directions/v5/mapbox/walking/2,1;4,3");
/// assert_eq!(request.query().get("overview"), Some("full"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct DirectionsRequest {
    /// Routing profile
    pub profile: Profile,
    /// Waypoints in travel order, 2 to 25 of them
    pub coordinates: Coordinates,

    /// Return alternative routes
    #[builder(setter(into, strip_option))]
    pub alternatives: Option<bool>,
    /// Per-segment metadata; forces a full overview
    pub annotations: Vec<Annotation>,
    /// Radius in meters, 1 to 1000, in which to avoid maneuvers at the start
    pub avoid_maneuver_radius: u32,
    /// Force the route to keep going straight at waypoints
    #[builder(setter(into, strip_option))]
    pub continue_straight: Option<bool>,
    /// Road classes to avoid
    pub excludes: Vec<Exclude>,
    /// Geometry encoding
    #[builder(setter(into, strip_option))]
    pub geometries: Option<Geometries>,
    /// Restricted lanes the route may use
    pub includes: Vec<Include>,
    /// Overview geometry detail
    #[builder(setter(into, strip_option))]
    pub overview: Option<Overview>,
    /// Approach side per waypoint
    pub approaches: Vec<Approach>,
    /// Return turn-by-turn steps
    #[builder(setter(into, strip_option))]
    pub steps: Option<bool>,
    /// Return banner objects
    #[builder(setter(into, strip_option))]
    pub banner_instructions: Option<bool>,
    /// Instruction language
    pub language: String,
    /// Emit instructions at roundabout exits
    #[builder(setter(into, strip_option))]
    pub roundabout_exits: Option<bool>,
    /// Return SSML voice instructions
    #[builder(setter(into, strip_option))]
    pub voice_instructions: Option<bool>,
    /// Units for voice instructions
    #[builder(setter(into, strip_option))]
    pub voice_units: Option<VoiceUnits>,
    /// Indices of coordinates that are waypoints; the rest are via points
    pub waypoints: Vec<usize>,
    /// Group waypoints by route
    #[builder(setter(into, strip_option))]
    pub waypoints_per_route: Option<bool>,
    /// Custom name per waypoint
    pub waypoint_names: Vec<String>,
    /// Arrival target per waypoint
    pub waypoint_targets: Vec<String>,

    /// Walking speed in m/s (walking)
    #[builder(setter(into, strip_option))]
    pub walking_speed: Option<f64>,
    /// Preference for walkways, -1 to 1 (walking)
    #[builder(setter(into, strip_option))]
    pub walkway_bias: Option<f64>,

    /// Preference for alleys, -1 to 1 (driving)
    #[builder(setter(into, strip_option))]
    pub alley_bias: Option<f64>,
    /// Desired arrival time (driving)
    #[builder(setter(into, strip_option))]
    pub arrive_by: Option<DateTime<Utc>>,
    /// Desired departure time (driving)
    #[builder(setter(into, strip_option))]
    pub depart_at: Option<DateTime<Utc>>,
    /// Vehicle height in meters (driving)
    pub max_height: u32,
    /// Vehicle width in meters (driving)
    pub max_width: u32,
    /// Vehicle weight in metric tons (driving)
    pub max_weight: u32,

    /// Snap to closed roads (driving-traffic)
    #[builder(setter(into, strip_option))]
    pub snapping_include_closures: Option<bool>,
    /// Snap to statically closed roads (driving-traffic)
    #[builder(setter(into, strip_option))]
    pub snapping_include_static_closures: Option<bool>,
}

impl DirectionsRequest {
    /// `/directions/v5/{profile}/{coordinates}`.
    pub fn path(&self) -> String {
        format!(
            "/directions/v5/{}/{}",
            self.profile,
            self.coordinates.wgs84()
        )
    }

    /// The overview actually sent: annotations are only returned with a
    /// full overview.
    pub fn effective_overview(&self) -> Option<Overview> {
        if self.annotations.is_empty() {
            self.overview
        } else {
            Some(Overview::Full)
        }
    }

    /// Query parameters, excluding the access token.
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.set_bool("alternatives", self.alternatives);
        query.join("annotations", &self.annotations, ",");
        query.set_nonzero("avoid_maneuver_radius", self.avoid_maneuver_radius);
        query.set_bool("continue_straight", self.continue_straight);
        query.join("exclude", &self.excludes, ",");
        query.set_opt("geometries", self.geometries);
        query.join("include", &self.includes, ",");
        query.set_opt("overview", self.effective_overview());
        query.join("approaches", &self.approaches, ";");
        query.set_bool("steps", self.steps);
        query.set_bool("banner_instructions", self.banner_instructions);
        query.set("language", self.language.as_str());
        query.set_bool("roundabout_exits", self.roundabout_exits);
        query.set_bool("voice_instructions", self.voice_instructions);
        query.set_opt("voice_units", self.voice_units);
        query.join(
            "waypoints",
            self.waypoints.iter().map(ToString::to_string),
            ";",
        );
        query.set_bool("waypoints_per_route", self.waypoints_per_route);
        query.join("waypoint_names", &self.waypoint_names, ";");
        query.join("waypoint_targets", &self.waypoint_targets, ";");
        query.set_fixed2("walking_speed", self.walking_speed);
        query.set_fixed2("walkway_bias", self.walkway_bias);
        query.set_fixed2("alley_bias", self.alley_bias);
        query.set_opt("arrive_by", self.arrive_by.as_ref().map(format_timestamp));
        query.set_opt("depart_at", self.depart_at.as_ref().map(format_timestamp));
        query.set_nonzero("max_height", self.max_height);
        query.set_nonzero("max_width", self.max_width);
        query.set_nonzero("max_weight", self.max_weight);
        query.set_bool("snapping_include_closures", self.snapping_include_closures);
        query.set_bool(
            "snapping_include_static_closures",
            self.snapping_include_static_closures,
        );
        query
    }
}

/// Routes returned by the directions endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsResponse {
    /// `Ok` on success
    pub code: String,
    /// Request identifier
    pub uuid: String,
    /// Routes, best first
    pub routes: Vec<Route>,
    /// Snapped input coordinates
    pub waypoints: Vec<Waypoint>,
}

/// A route through all waypoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Seconds
    pub duration: f64,
    /// Meters
    pub distance: f64,
    /// Name of the weight profile
    pub weight_name: String,
    /// Routing weight
    pub weight: f64,
    /// Typical duration without live traffic
    pub duration_typical: f64,
    /// Typical weight without live traffic
    pub weight_typical: f64,
    /// Encoded polyline string or GeoJSON object, depending on `geometries`
    pub geometry: serde_json::Value,
    /// One leg per pair of consecutive waypoints
    pub legs: Vec<RouteLeg>,
    /// Locale of voice instructions
    #[serde(rename = "voiceLocale")]
    pub voice_locale: String,
    /// Waypoints of this route when `waypoints_per_route` is set
    pub waypoints: Vec<Waypoint>,
}

/// The part of a route between two waypoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteLeg {
    /// Meters
    pub distance: f64,
    /// Seconds
    pub duration: f64,
    /// Names of the most significant roads
    pub summary: String,
    /// Routing weight
    pub weight: f64,
    /// Maneuvers, when steps were requested
    pub steps: Vec<Step>,
    /// Per-segment metadata
    pub annotation: DirectionsAnnotation,
    /// Administrative regions crossed
    pub admins: Vec<Admin>,
    /// Voice instructions for the leg
    #[serde(rename = "voiceInstructions")]
    pub voice_instructions: Vec<VoiceInstruction>,
    /// Banner instructions for the leg
    #[serde(rename = "bannerInstructions")]
    pub banner_instructions: Vec<BannerInstruction>,
    /// Via points passed on the leg
    pub via_waypoints: Vec<ViaWaypoint>,
}

/// One maneuver and the road travelled after it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Meters
    pub distance: f64,
    /// Seconds
    pub duration: f64,
    /// Step geometry, encoded like the route geometry
    pub geometry: serde_json::Value,
    /// Road name
    pub name: String,
    /// Maneuver at the start of the step
    pub maneuver: Maneuver,
    /// Mode of travel, e.g. `driving`
    pub mode: String,
    /// Routing weight
    pub weight: f64,
    /// Intersections passed
    pub intersections: Vec<Intersection>,
    /// Voice instructions for the step
    #[serde(rename = "voiceInstructions")]
    pub voice_instructions: Vec<VoiceInstruction>,
    /// Banner instructions for the step
    #[serde(rename = "bannerInstructions")]
    pub banner_instructions: Vec<BannerInstruction>,
}

/// A turn, merge, arrival or similar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Maneuver {
    /// Heading after the maneuver, degrees clockwise from north
    pub bearing_after: f64,
    /// Heading before the maneuver
    pub bearing_before: f64,
    /// `[lng, lat]`
    pub location: Vec<f64>,
    /// Maneuver type, e.g. `turn`
    #[serde(rename = "type")]
    pub kind: String,
    /// Direction modifier, e.g. `left`
    pub modifier: String,
    /// Human readable instruction
    pub instruction: String,
}

/// Per-segment metadata along a leg.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsAnnotation {
    /// Meters per segment
    pub distance: Vec<f64>,
    /// Seconds per segment
    pub duration: Vec<f64>,
    /// m/s per segment
    pub speed: Vec<f64>,
    /// Congestion level per segment
    pub congestion: Vec<String>,
    /// Speed limit per segment
    pub maxspeed: Vec<MaxSpeed>,
}

/// Posted speed limit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxSpeed {
    /// Limit value
    pub speed: u32,
    /// `km/h` or `mph`
    pub unit: String,
    /// No limit is posted
    pub none: bool,
    /// The limit is not known
    pub unknown: bool,
}

/// Administrative region crossed by a leg.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Admin {
    /// ISO 3166-1 alpha-3 country code
    pub iso_3166_1_alpha3: String,
    /// ISO 3166-1 alpha-2 country code
    pub iso_3166_1: String,
}

/// Spoken instruction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoiceInstruction {
    /// Distance before the end of the step at which to speak
    pub distance_along_geometry: f64,
    /// Plain text
    pub announcement: String,
    /// SSML markup
    pub ssml_announcement: String,
}

/// Visual instruction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerInstruction {
    /// Distance before the end of the step at which to show the banner
    pub distance_along_geometry: f64,
    /// Main instruction
    pub primary: Instruction,
    /// Additional instruction
    pub secondary: Option<Instruction>,
}

/// Text of a banner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Instruction {
    /// Full text
    pub text: String,
    /// Maneuver type
    #[serde(rename = "type")]
    pub kind: String,
    /// Direction modifier
    pub modifier: String,
    /// Text and icon pieces
    pub components: Vec<Component>,
}

/// Piece of a banner instruction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    /// Text of the piece
    pub text: String,
    /// e.g. `text` or `icon`
    #[serde(rename = "type")]
    pub kind: String,
}

/// An intersection passed during a step.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intersection {
    /// `[lng, lat]`
    pub location: Vec<f64>,
    /// Bearings of all roads at the intersection
    pub bearings: Vec<u32>,
    /// Whether each bearing may be entered
    pub entry: Vec<bool>,
    /// Index of the incoming bearing
    #[serde(rename = "in")]
    pub incoming: Option<usize>,
    /// Index of the outgoing bearing
    #[serde(rename = "out")]
    pub outgoing: Option<usize>,
}

/// A via point on a leg.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViaWaypoint {
    /// Index into the route waypoints
    pub waypoint_index: usize,
    /// Meters from the start of the leg
    pub distance_from_start: f64,
    /// Index into the leg geometry
    pub geometry_index: usize,
}
