use std::fmt;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::domain::DelayRange;

/// Draws a delay uniformly from `[min_ms, max_ms)`.
///
/// An empty range yields `min_ms`.
pub fn next_delay<R>(rng: &mut R, min_ms: u64, max_ms: u64) -> u64
where
    R: Rng + ?Sized,
{
    if max_ms <= min_ms {
        return min_ms;
    }
    rng.gen_range(min_ms..max_ms)
}

/// Decides how long to wait between two consecutive launches of a batch.
pub struct JitterScheduler {
    range: DelayRange,
    rng: Box<dyn RngCore + Send>,
}

impl JitterScheduler {
    #[must_use]
    pub fn new(range: DelayRange) -> Self {
        Self::with_rng(range, StdRng::from_entropy())
    }

    /// Uses `rng` as the random source, e.g. a seeded generator in tests.
    #[must_use]
    pub fn with_rng<R>(range: DelayRange, rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self {
            range,
            rng: Box::new(rng),
        }
    }

    pub fn next_delay(&mut self) -> Duration {
        Duration::from_millis(next_delay(
            &mut self.rng,
            self.range.min_ms(),
            self.range.max_ms(),
        ))
    }
}

impl fmt::Debug for JitterScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JitterScheduler")
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}
