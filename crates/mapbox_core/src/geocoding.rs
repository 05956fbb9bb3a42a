//! Geocoding v6: forward, reverse and batch lookups.

use crate::{BoundingBox, Coordinate, FeatureType, MatchCodeConfidence, MatchCodeValue, QueryParams};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Path of the batch geocoding endpoint, shared by forward and reverse batches.
pub const GEOCODE_BATCH_PATH: &str = "/search/geocode/v6/batch";

/// Search text or structured address to resolve into coordinates.
///
/// # Examples
///
/// ```
/// use mapbox_core::{FeatureType, ForwardGeocodeRequestBuilder};
///
/// let request = ForwardGeocodeRequestBuilder::default()
///     .search_text("Eiffel Tower")
///     .types(vec![FeatureType::Poi])
///     .limit(1u32)
///     .build()
///     .unwrap();
/// let query = request.query();
/// assert_eq!(query.get("q"), Some("Eiffel Tower"));
/// assert_eq!(query.get("autocomplete"), Some("false"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct ForwardGeocodeRequest {
    /// Free-form search text
    pub search_text: String,
    /// Street address line
    pub address_line1: String,
    /// Postal code
    pub postcode: String,
    /// City or town
    pub place: String,
    /// Return partial matches for incomplete input
    pub autocomplete: bool,
    /// Limit results to this area
    pub bbox: BoundingBox,
    /// ISO 3166 alpha-2 country filter, comma-separated
    pub country: String,
    /// IETF language tag
    pub language: String,
    /// Maximum number of results, zero for the server default
    pub limit: u32,
    /// Bias results towards this location
    pub proximity: Coordinate,
    /// Restrict results to these feature types
    pub types: Vec<FeatureType>,
}

impl ForwardGeocodeRequest {
    /// Endpoint path.
    pub const PATH: &'static str = "/search/geocode/v6/forward";

    /// Query parameters for `GET /search/geocode/v6/forward`.
    pub fn query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.set("autocomplete", self.autocomplete.to_string());
        query.set("q", self.search_text.as_str());
        query.set("address_line1", self.address_line1.as_str());
        query.set("postcode", self.postcode.as_str());
        query.set("place", self.place.as_str());
        if !self.bbox.min.is_zero() {
            query.set("bbox", self.bbox.query());
        }
        query.set("country", self.country.as_str());
        query.set("language", self.language.as_str());
        query.set_nonzero("limit", self.limit);
        if !self.proximity.is_zero() {
            query.set("proximity", self.proximity.wgs84());
        }
        query.join("types", &self.types, ",");
        query
    }
}

/// One entry of a forward batch body.
impl Serialize for ForwardGeocodeRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            #[serde(rename = "q", skip_serializing_if = "str::is_empty")]
            search_text: &'a str,
            #[serde(skip_serializing_if = "str::is_empty")]
            address_line1: &'a str,
            #[serde(skip_serializing_if = "str::is_empty")]
            postcode: &'a str,
            #[serde(skip_serializing_if = "str::is_empty")]
            place: &'a str,
            #[serde(skip_serializing_if = "std::ops::Not::not")]
            autocomplete: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            bbox: Option<&'a BoundingBox>,
            #[serde(skip_serializing_if = "str::is_empty")]
            country: &'a str,
            #[serde(skip_serializing_if = "str::is_empty")]
            language: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            proximity: Option<[f64; 2]>,
            #[serde(skip_serializing_if = "<[FeatureType]>::is_empty")]
            types: &'a [FeatureType],
        }

        Entry {
            search_text: &self.search_text,
            address_line1: &self.address_line1,
            postcode: &self.postcode,
            place: &self.place,
            autocomplete: self.autocomplete,
            bbox: (!self.bbox.is_unset()).then_some(&self.bbox),
            country: &self.country,
            language: &self.language,
            limit: (self.limit != 0).then_some(self.limit),
            proximity: (!self.proximity.is_zero()).then(|| self.proximity.to_lng_lat()),
            types: &self.types,
        }
        .serialize(serializer)
    }
}

/// Coordinates to resolve into places.
#[derive(Debug, Clone, PartialEq, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct ReverseGeocodeRequest {
    /// Location to look up
    pub coordinate: Coordinate,
    /// ISO 3166 alpha-2 country filter
    pub country: String,
    /// IETF language tag
    pub language: String,
    /// Maximum number of results, zero for the server default
    pub limit: u32,
    /// Restrict results to these feature types
    pub types: Vec<FeatureType>,
}

impl ReverseGeocodeRequest {
    /// Endpoint path.
    pub const PATH: &'static str = "/search/geocode/v6/reverse";

    /// Reverse lookup of a single coordinate.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Self::default()
        }
    }

    /// Query parameters for `GET /search/geocode/v6/reverse`.
    pub fn query(&self) -> QueryParams {
        reverse_query(
            &self.coordinate,
            &self.country,
            &self.language,
            self.limit,
            &self.types,
        )
    }
}

/// One entry of a reverse batch body.
impl Serialize for ReverseGeocodeRequest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            longitude: f64,
            latitude: f64,
            #[serde(skip_serializing_if = "str::is_empty")]
            country: &'a str,
            #[serde(skip_serializing_if = "str::is_empty")]
            language: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
            #[serde(skip_serializing_if = "<[FeatureType]>::is_empty")]
            types: &'a [FeatureType],
        }

        Entry {
            longitude: self.coordinate.lng,
            latitude: self.coordinate.lat,
            country: &self.country,
            language: &self.language,
            limit: (self.limit != 0).then_some(self.limit),
            types: &self.types,
        }
        .serialize(serializer)
    }
}

/// Shared by geocoding and search box reverse lookups.
pub(crate) fn reverse_query(
    coordinate: &Coordinate,
    country: &str,
    language: &str,
    limit: u32,
    types: &[FeatureType],
) -> QueryParams {
    let mut query = QueryParams::new();
    query.set("latitude", coordinate.lat.to_string());
    query.set("longitude", coordinate.lng.to_string());
    query.set("country", country);
    query.set("language", language);
    query.set_nonzero("limit", limit);
    query.join("types", types, ",");
    query
}

/// A GeoJSON feature collection of geocoding results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeResponse {
    /// Always `FeatureCollection`
    #[serde(rename = "type")]
    pub kind: String,
    /// Matching features, best first
    pub features: Vec<Feature>,
    /// Attribution notice
    pub attribution: String,
}

/// Results of a batch request, one collection per query, in request order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeBatchResponse {
    /// One response per query
    pub batch: Vec<GeocodeResponse>,
}

/// A single geocoding result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    /// Feature identifier
    pub id: String,
    /// Always `Feature`
    #[serde(rename = "type")]
    pub kind: String,
    /// Point geometry
    pub geometry: Option<Geometry>,
    /// Descriptive properties
    pub properties: Option<Properties>,
}

/// GeoJSON point geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    /// Always `Point`
    #[serde(rename = "type")]
    pub kind: String,
    /// `[lng, lat]`
    pub coordinates: Vec<f64>,
}

/// Properties of a geocoding result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    /// Mapbox feature identifier
    pub mapbox_id: String,
    /// Kind of feature
    pub feature_type: Option<FeatureType>,
    /// Formatted name
    pub name: String,
    /// Name in the preferred language
    pub name_preferred: String,
    /// Secondary formatted name, e.g. the city and country
    pub place_formatted: String,
    /// Complete formatted address
    pub full_address: String,
    /// Precise location
    pub coordinates: ExtendedCoordinate,
    /// Hierarchy of parent features, keyed by feature type
    pub context: HashMap<String, Context>,
    /// `[minLng, minLat, maxLng, maxLat]`
    pub bbox: Vec<f64>,
    /// How well each component of a structured query matched
    pub match_code: Option<MatchCode>,
}

/// Location of a result with its access points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedCoordinate {
    /// Longitude
    pub longitude: f64,
    /// Latitude
    pub latitude: f64,
    /// Accuracy of address results, e.g. `rooftop`
    pub accuracy: String,
    /// Points suitable for navigation
    pub routable_points: Vec<RoutablePoint>,
}

/// An entrance or access point of a result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutablePoint {
    /// Kind of access point
    pub name: String,
    /// Longitude
    pub longitude: f64,
    /// Latitude
    pub latitude: f64,
}

/// One parent feature of a result.
///
/// Fields present depend on the feature type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Mapbox feature identifier
    pub mapbox_id: String,
    /// Feature name
    pub name: String,
    /// Wikidata identifier
    pub wikidata_id: String,
    /// Region code, e.g. `CA`
    pub region_code: String,
    /// Full region code, e.g. `US-CA`
    pub region_code_full: String,
    /// House number
    pub address_number: String,
    /// Street name
    pub street_name: String,
    /// ISO 3166 alpha-2 country code
    pub country_code: String,
    /// ISO 3166 alpha-3 country code
    pub country_code_alpha_3: String,
}

/// Per-component match quality of a structured query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchCode {
    /// House number
    pub address_number: MatchCodeValue,
    /// Street name
    pub street: MatchCodeValue,
    /// Postal code
    pub postcode: MatchCodeValue,
    /// City or town
    pub place: MatchCodeValue,
    /// Region or state
    pub region: MatchCodeValue,
    /// Locality
    pub locality: MatchCodeValue,
    /// Country
    pub country: MatchCodeValue,
    /// Overall confidence
    pub confidence: MatchCodeConfidence,
}
