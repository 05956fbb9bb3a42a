//! Directions and directions matrix endpoints.

use crate::Client;
use mapbox_core::{
    DirectionsMatrixRequest, DirectionsMatrixResponse, DirectionsRequest, DirectionsResponse,
};
use mapbox_error::MapboxResult;
use mapbox_rate_limit::Bucket;
use tracing::instrument;

impl Client {
    /// Route through the request's coordinates.
    ///
    /// # Errors
    ///
    /// Fails when the `directions` bucket is blocked, or with the error the
    /// API or transport reported.
    #[instrument(skip(self, request), fields(profile = %request.profile, waypoints = request.coordinates.len()))]
    pub async fn directions(&self, request: &DirectionsRequest) -> MapboxResult<DirectionsResponse> {
        self.get(Bucket::Directions, &request.path(), request.query())
            .await
    }

    /// Travel times and distances between the request's coordinates.
    ///
    /// # Errors
    ///
    /// Fails when the `matrix` bucket is blocked, or with the error the API
    /// or transport reported.
    #[instrument(skip(self, request), fields(profile = %request.profile, points = request.coordinates.len()))]
    pub async fn directions_matrix(
        &self,
        request: &DirectionsMatrixRequest,
    ) -> MapboxResult<DirectionsMatrixResponse> {
        self.get(Bucket::Matrix, &request.path(), request.query())
            .await
    }
}
