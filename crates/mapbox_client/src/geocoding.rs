//! Geocoding v6 endpoints, all in the `geocoding` bucket.
//!
//! See <https://docs.mapbox.com/api/search/geocoding/>.

use crate::Client;
use mapbox_core::{
    ForwardGeocodeRequest, GEOCODE_BATCH_PATH, GeocodeBatchResponse, GeocodeResponse,
    ReverseGeocodeRequest,
};
use mapbox_error::MapboxResult;
use mapbox_rate_limit::Bucket;
use tracing::instrument;

impl Client {
    /// Resolve search text or a structured address into places.
    ///
    /// # Errors
    ///
    /// Fails when the bucket is blocked, or with the error the API or
    /// transport reported.
    #[instrument(skip(self, request), fields(q = %request.search_text))]
    pub async fn forward_geocode(
        &self,
        request: &ForwardGeocodeRequest,
    ) -> MapboxResult<GeocodeResponse> {
        self.get(Bucket::Geocoding, ForwardGeocodeRequest::PATH, request.query())
            .await
    }

    /// Resolve many queries in one call; results come back in request order.
    ///
    /// # Errors
    ///
    /// As [`Client::forward_geocode`], plus a JSON error if the body cannot
    /// be encoded.
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub async fn forward_geocode_batch(
        &self,
        requests: &[ForwardGeocodeRequest],
    ) -> MapboxResult<GeocodeBatchResponse> {
        self.post_json(Bucket::Geocoding, GEOCODE_BATCH_PATH, requests)
            .await
    }

    /// Find places at a coordinate.
    ///
    /// # Errors
    ///
    /// As [`Client::forward_geocode`].
    #[instrument(skip(self, request), fields(lat = request.coordinate.lat, lng = request.coordinate.lng))]
    pub async fn reverse_geocode(
        &self,
        request: &ReverseGeocodeRequest,
    ) -> MapboxResult<GeocodeResponse> {
        self.get(Bucket::Geocoding, ReverseGeocodeRequest::PATH, request.query())
            .await
    }

    /// Reverse geocode many coordinates in one call.
    ///
    /// # Errors
    ///
    /// As [`Client::forward_geocode_batch`].
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub async fn reverse_geocode_batch(
        &self,
        requests: &[ReverseGeocodeRequest],
    ) -> MapboxResult<GeocodeBatchResponse> {
        self.post_json(Bucket::Geocoding, GEOCODE_BATCH_PATH, requests)
            .await
    }
}
