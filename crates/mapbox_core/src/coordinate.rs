//! Coordinates in the WGS84 `longitude,latitude` order the API expects.

use serde::{Deserialize, Serialize};

/// A point on the globe.
///
/// # Examples
///
/// ```
/// use mapbox_core::Coordinate;
///
/// let eiffel = Coordinate::new(48.8584, 2.2945);
/// assert_eq!(eiffel.wgs84(), "2.2945,48.8584");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True for the unset `(0, 0)` coordinate.
    pub fn is_zero(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }

    /// `lng,lat` as used in paths and query strings.
    pub fn wgs84(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }

    /// `[lng, lat]` as used in JSON bodies.
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl std::str::FromStr for Coordinate {
    type Err = String;

    /// Parses `lat,lng`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected 'lat,lng', got: {}", s))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid latitude '{}': {}", lat, e))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid longitude '{}': {}", lng, e))?;
        Ok(Self { lat, lng })
    }
}

/// An ordered list of coordinates, e.g. route waypoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_more::From)]
pub struct Coordinates(pub Vec<Coordinate>);

impl Coordinates {
    /// Semicolon-separated `lng,lat` pairs.
    ///
    /// ```
    /// use mapbox_core::{Coordinate, Coordinates};
    ///
    /// let coords = Coordinates::from(vec![
    ///     Coordinate::new(33.122508, -117.306786),
    ///     Coordinate::new(32.73381, -117.193443),
    /// ]);
    /// assert_eq!(coords.wgs84(), "-117.306786,33.122508;-117.193443,32.73381");
    /// ```
    pub fn wgs84(&self) -> String {
        self.0
            .iter()
            .map(Coordinate::wgs84)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no coordinates.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A rectangular area given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// South-west corner
    pub min: Coordinate,
    /// North-east corner
    pub max: Coordinate,
}

impl BoundingBox {
    /// Create a bounding box from its corners.
    pub fn new(min: Coordinate, max: Coordinate) -> Self {
        Self { min, max }
    }

    /// `minLng,minLat,maxLng,maxLat`.
    pub fn query(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min.lng, self.min.lat, self.max.lng, self.max.lat
        )
    }

    /// True when either corner is unset.
    pub fn is_unset(&self) -> bool {
        self.min.is_zero() || self.max.is_zero()
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.min.lng, self.min.lat, self.max.lng, self.max.lat].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [min_lng, min_lat, max_lng, max_lat] = <[f64; 4]>::deserialize(deserializer)?;
        Ok(Self {
            min: Coordinate::new(min_lat, min_lng),
            max: Coordinate::new(max_lat, max_lng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_coordinate_is_unset() {
        assert!(Coordinate::default().is_zero());
        assert!(!Coordinate::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn parses_lat_lng_pairs() {
        let c: Coordinate = "48.85, 2.29".parse().unwrap();
        assert_eq!(c, Coordinate::new(48.85, 2.29));
        assert!("48.85".parse::<Coordinate>().is_err());
        assert!("north,2.29".parse::<Coordinate>().is_err());
    }

    #[test]
    fn bounding_box_query_is_lng_first() {
        let bbox = BoundingBox::new(Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0));
        assert_eq!(bbox.query(), "2,1,4,3");
        assert_eq!(serde_json::to_string(&bbox).unwrap(), "[2.0,1.0,4.0,3.0]");
    }

    #[test]
    fn bounding_box_with_one_corner_is_unset() {
        let bbox = BoundingBox::new(Coordinate::default(), Coordinate::new(3.0, 4.0));
        assert!(bbox.is_unset());
    }
}
