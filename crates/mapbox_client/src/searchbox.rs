//! Search Box endpoints.

use crate::Client;
use mapbox_core::{SearchboxReverseRequest, SearchboxReverseResponse};
use mapbox_error::MapboxResult;
use mapbox_rate_limit::Bucket;
use tracing::instrument;

impl Client {
    /// Addresses and points of interest at a coordinate.
    ///
    /// # Errors
    ///
    /// Fails when the `searchbox` bucket is blocked, or with the error the
    /// API or transport reported.
    #[instrument(skip(self, request), fields(lat = request.coordinate.lat, lng = request.coordinate.lng))]
    pub async fn searchbox_reverse(
        &self,
        request: &SearchboxReverseRequest,
    ) -> MapboxResult<SearchboxReverseResponse> {
        self.get(Bucket::Searchbox, SearchboxReverseRequest::PATH, request.query())
            .await
    }
}
