//! Directions matrix v1: travel times and distances between many points.

use crate::{Annotation, Approach, Coordinates, Profile, QueryParams, Waypoint};
use serde::{Deserialize, Serialize};

/// A matrix request.
///
/// ```
/// use mapbox_core::{Coordinate, DirectionsMatrixRequestBuilder, Profile};
///
/// let request = DirectionsMatrixRequestBuilder::default()
///     .profile(Profile::Cycling)
///     .coordinates(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)])
///     .sources(vec![0])
///     .build()
///     .unwrap();
/// assert_eq!(request.path(), "/directions-matrix/v1/mapbox/cycling/2,1;4,3");
/// assert_eq!(request.query().get("sources"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct DirectionsMatrixRequest {
    /// Routing profile
    pub profile: Profile,
    /// All points of the matrix
    pub coordinates: Coordinates,
    /// Which tables to return; durations only when empty
    pub annotations: Vec<Annotation>,
    /// Approach side per coordinate
    pub approaches: Vec<Approach>,
    /// Coordinate indices used as destinations; all when empty
    pub destinations: Vec<usize>,
    /// Coordinate indices used as sources; all when empty
    pub sources: Vec<usize>,
    /// Speed in km/h used to estimate unroutable pairs, zero to disable
    pub fallback_speed: f64,
}

impl DirectionsMatrixRequest {
    /// `/directions-matrix/v1/{profile}/{coordinates}`.
    pub fn path(&self) -> String {
        format!(
            "/directions-matrix/v1/{}/{}",
            self.profile,
            self.coordinates.wgs84()
        )
    }

    /// Query parameters, excluding the access token.
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.join("annotations", &self.annotations, ",");
        query.join("approaches", &self.approaches, ";");
        query.join(
            "destinations",
            self.destinations.iter().map(ToString::to_string),
            ";",
        );
        query.join("sources", self.sources.iter().map(ToString::to_string), ";");
        if self.fallback_speed != 0.0 {
            query.set("fallback_speed", format!("{:.6}", self.fallback_speed));
        }
        query
    }
}

/// Tables returned by the matrix endpoint, indexed `[source][destination]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsMatrixResponse {
    /// `Ok` on success
    pub code: String,
    /// Seconds; `None` where no route exists
    pub durations: Vec<Vec<Option<f64>>>,
    /// Meters; `None` where no route exists
    pub distances: Vec<Vec<Option<f64>>>,
    /// Snapped destinations
    pub destinations: Vec<Waypoint>,
    /// Snapped sources
    pub sources: Vec<Waypoint>,
}
