//! Rate-limit buckets.

use serde::{Deserialize, Serialize};

/// A class of operations sharing one server-side rate limit.
///
/// See <https://docs.mapbox.com/api/overview/#rate-limits>.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Bucket {
    /// Forward, reverse and batch geocoding
    Geocoding,
    /// Directions matrix
    Matrix,
    /// Directions
    Directions,
    /// Search box
    Searchbox,
}
