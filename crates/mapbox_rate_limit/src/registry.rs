//! Reset times per bucket.

use crate::{Bucket, Clock, SystemClock};
use chrono::{DateTime, Utc};
use mapbox_error::RateLimitError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

/// Remembers, per bucket, until when the API asked us to stop calling.
///
/// A bucket without an entry is open. An entry is written when a 429 with a
/// usable reset header is observed, and removed by the first check that sees
/// its time has passed. The registry never talks to the network, so its lock
/// is only ever held for a map access.
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use mapbox_rate_limit::{Bucket, ManualClock, RateLimitRegistry};
/// use std::sync::Arc;
///
/// # #[tokio::main]
/// # async fn main() {
/// let clock = ManualClock::default();
/// let registry = RateLimitRegistry::with_clock(Arc::new(clock.clone()));
///
/// registry
///     .record_reset(Bucket::Matrix, Utc::now() + TimeDelta::seconds(30))
///     .await;
/// let err = registry.check_blocked(Bucket::Matrix).await.unwrap_err();
/// assert_eq!(err.message(), "Rate limiting matrix requests");
///
/// clock.advance(TimeDelta::seconds(31));
/// assert!(registry.check_blocked(Bucket::Matrix).await.is_ok());
/// # }
/// ```
#[derive(Debug)]
pub struct RateLimitRegistry {
    resets: RwLock<HashMap<Bucket, DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl RateLimitRegistry {
    /// Empty registry on the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Empty registry reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            resets: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Fail if `bucket` is blocked; clear its entry if the block has expired.
    ///
    /// # Errors
    ///
    /// Returns a [`RateLimitError`] naming the bucket and the time left when
    /// the recorded reset is still in the future.
    #[instrument(skip(self), fields(bucket = %bucket))]
    pub async fn check_blocked(&self, bucket: Bucket) -> Result<(), RateLimitError> {
        let now = self.clock.now();
        {
            let resets = self.resets.read().await;
            match resets.get(&bucket) {
                None => return Ok(()),
                Some(reset_at) if *reset_at > now => {
                    let remaining = (*reset_at - now).to_std().unwrap_or_default();
                    warn!(reset_at = %reset_at, ?remaining, "Bucket is rate limited");
                    return Err(RateLimitError::new(bucket.to_string(), remaining));
                }
                Some(_) => {}
            }
        }

        // Another task may have recorded a newer reset between the two locks.
        let mut resets = self.resets.write().await;
        let now = self.clock.now();
        match resets.get(&bucket) {
            Some(reset_at) if *reset_at > now => {
                let remaining = (*reset_at - now).to_std().unwrap_or_default();
                warn!(reset_at = %reset_at, ?remaining, "Bucket was blocked again");
                Err(RateLimitError::new(bucket.to_string(), remaining))
            }
            Some(_) => {
                resets.remove(&bucket);
                debug!("Rate limit expired, bucket cleared");
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Block `bucket` until `reset_at`, replacing any earlier entry.
    #[instrument(skip(self), fields(bucket = %bucket, reset_at = %reset_at))]
    pub async fn record_reset(&self, bucket: Bucket, reset_at: DateTime<Utc>) {
        let previous = self.resets.write().await.insert(bucket, reset_at);
        debug!(?previous, "Recorded rate limit reset");
    }

    /// The recorded reset for `bucket`, if any, without clearing it.
    pub async fn blocked_until(&self, bucket: Bucket) -> Option<DateTime<Utc>> {
        self.resets.read().await.get(&bucket).copied()
    }

    /// The clock this registry reads.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}

impl Default for RateLimitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
