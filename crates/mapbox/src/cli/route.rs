//! Directions and matrix command handlers.

use super::print_json;
use mapbox::{
    BuilderError, Client, Coordinate, DirectionsMatrixRequestBuilder, DirectionsRequestBuilder,
    MapboxResult, Profile,
};
use tracing::instrument;

/// Route through the coordinates and print the routes.
#[instrument(skip(client, coordinates), fields(waypoints = coordinates.len()))]
pub async fn directions(
    client: &Client,
    profile: Profile,
    coordinates: Vec<Coordinate>,
    steps: bool,
    alternatives: bool,
) -> MapboxResult<()> {
    let request = DirectionsRequestBuilder::default()
        .profile(profile)
        .coordinates(coordinates)
        .steps(steps)
        .alternatives(alternatives)
        .build()
        .map_err(|e| BuilderError::new("directions", e.to_string()))?;

    let response = client.directions(&request).await?;
    print_json(&response)
}

/// Print the travel time and distance matrix between the coordinates.
#[instrument(skip(client, coordinates), fields(points = coordinates.len()))]
pub async fn matrix(
    client: &Client,
    profile: Profile,
    coordinates: Vec<Coordinate>,
) -> MapboxResult<()> {
    let request = DirectionsMatrixRequestBuilder::default()
        .profile(profile)
        .coordinates(coordinates)
        .build()
        .map_err(|e| BuilderError::new("directions matrix", e.to_string()))?;

    let response = client.directions_matrix(&request).await?;
    print_json(&response)
}
