//! Query mapping of every request type.

use chrono::{TimeZone, Utc};
use mapbox_core::{
    Annotation, Approach, BoundingBox, Coordinate, DirectionsRequestBuilder, Exclude,
    FeatureType, ForwardGeocodeRequestBuilder, Geometries, Include, Overview, Profile,
    ReverseGeocodeRequestBuilder, VoiceUnits,
};

#[test]
fn test_directions_query_mapping() {
    let request = DirectionsRequestBuilder::default()
        .profile(Profile::DrivingTraffic)
        .coordinates(vec![
            Coordinate::new(33.122508, -117.306786),
            Coordinate::new(32.73381, -117.193443),
        ])
        .alternatives(true)
        .annotations(vec![Annotation::Distance, Annotation::Duration])
        .avoid_maneuver_radius(1u32)
        .continue_straight(true)
        .excludes(vec![Exclude::Unpaved, Exclude::CashOnlyTolls])
        .geometries(Geometries::GeoJson)
        .includes(vec![Include::Hov2, Include::Hot])
        .overview(Overview::Simplified)
        .approaches(vec![Approach::Unrestricted])
        .steps(true)
        .banner_instructions(true)
        .language("en")
        .roundabout_exits(true)
        .voice_instructions(true)
        .voice_units(VoiceUnits::Metric)
        .waypoints_per_route(true)
        .waypoint_names(vec!["wp1".to_string(), "wp2".to_string()])
        .waypoint_targets(vec!["wpt1".to_string(), "wpt2".to_string()])
        .snapping_include_closures(true)
        .snapping_include_static_closures(true)
        .build()
        .expect("valid request");

    assert_eq!(
        request.path(),
        "/directions/v5/mapbox/driving-traffic/-117.306786,33.122508;-117.193443,32.73381"
    );

    let query = request.query();
    let pairs: Vec<(String, String)> = query
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let expected = [
        ("alternatives", "true"),
        ("annotations", "distance,duration"),
        ("approaches", "unrestricted"),
        ("avoid_maneuver_radius", "1"),
        ("banner_instructions", "true"),
        ("continue_straight", "true"),
        ("exclude", "unpaved,cash_only_tolls"),
        ("geometries", "geojson"),
        ("include", "hov2,hot"),
        ("language", "en"),
        ("overview", "full"),
        ("roundabout_exits", "true"),
        ("snapping_include_closures", "true"),
        ("snapping_include_static_closures", "true"),
        ("steps", "true"),
        ("voice_instructions", "true"),
        ("voice_units", "metric"),
        ("waypoint_names", "wp1;wp2"),
        ("waypoint_targets", "wpt1;wpt2"),
        ("waypoints_per_route", "true"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn test_directions_timestamps_are_utc() {
    let arrive = chrono::FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let request = DirectionsRequestBuilder::default()
        .arrive_by(arrive)
        .depart_at(Utc.with_ymd_and_hms(2024, 6, 1, 7, 30, 0).unwrap())
        .build()
        .expect("valid request");
    let query = request.query();
    assert_eq!(query.get("arrive_by"), Some("2024-06-01T08:00:00Z"));
    assert_eq!(query.get("depart_at"), Some("2024-06-01T07:30:00Z"));
}

#[test]
fn test_forward_geocode_query_mapping() {
    let request = ForwardGeocodeRequestBuilder::default()
        .search_text("1600 Pennsylvania Ave")
        .autocomplete(true)
        .bbox(BoundingBox::new(
            Coordinate::new(38.8, -77.1),
            Coordinate::new(39.0, -76.9),
        ))
        .country("us")
        .limit(5u32)
        .proximity(Coordinate::new(38.9, -77.03))
        .types(vec![FeatureType::Address, FeatureType::Street])
        .build()
        .expect("valid request");

    let query = request.query();
    assert_eq!(query.get("q"), Some("1600 Pennsylvania Ave"));
    assert_eq!(query.get("autocomplete"), Some("true"));
    assert_eq!(query.get("bbox"), Some("-77.1,38.8,-76.9,39"));
    assert_eq!(query.get("country"), Some("us"));
    assert_eq!(query.get("limit"), Some("5"));
    assert_eq!(query.get("proximity"), Some("-77.03,38.9"));
    assert_eq!(query.get("types"), Some("address,street"));
    assert_eq!(query.get("postcode"), None);
    assert_eq!(query.get("language"), None);
}

#[test]
fn test_forward_geocode_always_sends_autocomplete() {
    let request = ForwardGeocodeRequestBuilder::default()
        .build()
        .expect("valid request");
    let pairs: Vec<_> = request.query().iter().map(|(k, v)| format!("{k}={v}")).collect();
    assert_eq!(pairs, vec!["autocomplete=false"]);
}

#[test]
fn test_reverse_geocode_query_mapping() {
    let request = ReverseGeocodeRequestBuilder::default()
        .coordinate(Coordinate::new(40.733, -73.989))
        .language("fr")
        .types(vec![FeatureType::PoiLandmark])
        .build()
        .expect("valid request");
    let query = request.query();
    assert_eq!(query.get("latitude"), Some("40.733"));
    assert_eq!(query.get("longitude"), Some("-73.989"));
    assert_eq!(query.get("language"), Some("fr"));
    assert_eq!(query.get("types"), Some("poi.landmark"));
}
