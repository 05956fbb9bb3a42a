//! Geocoding and search box command handlers.

use super::print_json;
use mapbox::{
    BuilderError, Client, Coordinate, ForwardGeocodeRequestBuilder, MapboxResult,
    ReverseGeocodeRequest, SearchboxReverseRequest,
};
use tracing::instrument;

/// Forward geocode a query and print the matches.
#[instrument(skip(client))]
pub async fn forward(
    client: &Client,
    query: &str,
    country: Option<&str>,
    language: Option<&str>,
    limit: u32,
    autocomplete: bool,
) -> MapboxResult<()> {
    let request = ForwardGeocodeRequestBuilder::default()
        .search_text(query)
        .country(country.unwrap_or_default())
        .language(language.unwrap_or_default())
        .limit(limit)
        .autocomplete(autocomplete)
        .build()
        .map_err(|e| BuilderError::new("forward geocode", e.to_string()))?;

    let response = client.forward_geocode(&request).await?;
    print_json(&response)
}

/// Reverse geocode a coordinate and print the matches.
#[instrument(skip(client))]
pub async fn reverse(
    client: &Client,
    coordinate: Coordinate,
    language: Option<&str>,
) -> MapboxResult<()> {
    let mut request = ReverseGeocodeRequest::new(coordinate);
    if let Some(language) = language {
        request.language = language.to_string();
    }

    let response = client.reverse_geocode(&request).await?;
    print_json(&response)
}

/// Search box reverse lookup around a coordinate.
#[instrument(skip(client))]
pub async fn searchbox(
    client: &Client,
    coordinate: Coordinate,
    limit: Option<u32>,
) -> MapboxResult<()> {
    let mut request = SearchboxReverseRequest::new(coordinate);
    request.limit = limit.unwrap_or_default();

    let response = client.searchbox_reverse(&request).await?;
    print_json(&response)
}
