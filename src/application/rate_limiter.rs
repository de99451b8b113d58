/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/

//! Request pacing
//!
//! Uses the `governor` crate with a quota of one cell per `min_interval` and a
//! burst of one, so a dispatch may start only once `min_interval` has passed
//! since the previous one from the same client. There is no queue and no
//! per-endpoint state.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// Minimum-interval pacer shared by all clones of a client
///
/// governor keeps its state in an atomic and claims slots with a
/// compare-and-swap, so concurrent callers each get a distinct slot.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
    min_interval: Duration,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// # Example
    ///
    /// ```ignore
    /// use skrybe_client::application::config::RateLimiterConfig;
    /// use skrybe_client::application::rate_limiter::RateLimiter;
    ///
    /// let limiter = RateLimiter::new(&RateLimiterConfig { min_interval_ms: 100 });
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let min_interval = config.min_interval();

        let quota = Quota::with_period(min_interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
            min_interval,
        }
    }

    /// Minimum interval between dispatch starts
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until a dispatch may start and claims the slot
    ///
    /// Suspends the calling task for the remainder of the interval when the
    /// previous dispatch started too recently.
    pub async fn wait(&self) {
        if self.limiter.check().is_ok() {
            return;
        }
        trace!("Pacing: waiting for the next request slot");
        self.limiter.until_ready().await;
    }

    /// Claims the slot if it is free right now
    ///
    /// # Returns
    ///
    /// * `true` if a dispatch may start immediately (the slot is now taken)
    /// * `false` if the previous dispatch started too recently
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .field("min_interval", &self.min_interval)
            .finish()
    }
}
