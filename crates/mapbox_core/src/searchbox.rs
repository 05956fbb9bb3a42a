//! Search Box v1 reverse lookup.

use crate::{
    Context, Coordinate, ExtendedCoordinate, FeatureType, Geometry, QueryParams,
    geocoding::reverse_query,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Coordinates to resolve into addresses and points of interest.
#[derive(Debug, Clone, PartialEq, Default, derive_builder::Builder)]
#[builder(setter(into), default)]
pub struct SearchboxReverseRequest {
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

impl SearchboxReverseRequest {
    /// Endpoint path.
    pub const PATH: &'static str = "/search/searchbox/v1/reverse";

    /// Reverse lookup of a single coordinate.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Self::default()
        }
    }

    /// Query parameters, excluding the access token.
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

/// Feature collection returned by the search box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchboxReverseResponse {
    /// Always `FeatureCollection`
    #[serde(rename = "type")]
    pub kind: String,
    /// Matching features, nearest first
    pub features: Vec<SearchboxFeature>,
    /// Attribution notice
    pub attribution: String,
}

/// A single search box result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchboxFeature {
    /// Always `Feature`
    #[serde(rename = "type")]
    pub kind: String,
    /// Point geometry
    pub geometry: Option<Geometry>,
    /// Descriptive properties
    pub properties: Option<SearchboxProperties>,
}

/// Properties of a search box result; a superset of the geocoding ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchboxProperties {
    /// Mapbox feature identifier
    pub mapbox_id: String,
    /// Kind of feature
    pub feature_type: Option<FeatureType>,
    /// Formatted name
    pub name: String,
    /// Name in the preferred language
    pub name_preferred: String,
    /// Secondary formatted name
    pub place_formatted: String,
    /// Complete formatted address
    pub full_address: String,
    /// Precise location
    pub coordinates: ExtendedCoordinate,
    /// Parent features keyed by feature type
    pub context: HashMap<String, Context>,
    /// `[minLng, minLat, maxLng, maxLat]`
    pub bbox: Vec<f64>,
    /// Language of the result
    pub language: String,
    /// Maki icon name
    pub maki: String,
    /// POI categories
    pub poi_category: Vec<String>,
    /// POI category identifiers
    pub poi_category_ids: Vec<String>,
    /// Brand names
    pub brand: SearchboxBrand,
    /// Brand identifier
    pub brand_id: String,
    /// Identifiers in other datasets
    pub external_ids: HashMap<String, String>,
    /// Free-form POI metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Brand names of a POI.
///
/// The API is inconsistent about the shape of this field, so decoding
/// accepts anything: `null` is empty, an array of strings is taken as is,
/// and any other value is kept as its JSON text.
///
/// ```
/// use mapbox_core::SearchboxBrand;
///
/// let brand: SearchboxBrand = serde_json::from_str(r#""Starbucks""#).unwrap();
/// assert_eq!(brand.0, vec![r#""Starbucks""#.to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SearchboxBrand(pub Vec<String>);

impl<'de> Deserialize<'de> for SearchboxBrand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let names = match value {
            serde_json::Value::Null => Vec::new(),
            serde_json::Value::Array(items)
                if items.iter().all(serde_json::Value::is_string) =>
            {
                items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            }
            other => vec![other.to_string()],
        };
        Ok(Self(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(json: &str) -> SearchboxBrand {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn brand_null_is_empty() {
        assert!(brand("null").0.is_empty());
    }

    #[test]
    fn brand_string_array_is_taken_as_is() {
        assert_eq!(brand(r#"["A","B"]"#).0, vec!["A", "B"]);
    }

    #[test]
    fn brand_other_values_keep_json_text() {
        assert_eq!(brand("42").0, vec!["42"]);
        assert_eq!(brand(r#"[1,"x"]"#).0, vec![r#"[1,"x"]"#]);
        assert_eq!(brand(r#"{"k":"v"}"#).0, vec![r#"{"k":"v"}"#]);
    }

    #[test]
    fn missing_brand_defaults_to_empty() {
        let props: SearchboxProperties = serde_json::from_str(r#"{"name":"Cafe"}"#).unwrap();
        assert_eq!(props.name, "Cafe");
        assert!(props.brand.0.is_empty());
    }

    #[test]
    fn query_matches_geocoding_reverse() {
        let request = SearchboxReverseRequest {
            coordinate: Coordinate::new(51.5, -0.12),
            types: vec![FeatureType::Poi, FeatureType::Address],
            limit: 3,
            ..Default::default()
        };
        let query = request.query();
        assert_eq!(query.get("latitude"), Some("51.5"));
        assert_eq!(query.get("longitude"), Some("-0.12"));
        assert_eq!(query.get("types"), Some("poi,address"));
        assert_eq!(query.get("limit"), Some("3"));
    }
}
