use std::num::NonZeroUsize;

use crate::error::ValidationError;

use super::OperationRequest;

/// Inclusive-exclusive bounds for the pause between two launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    /// # Errors
    ///
    /// Returns `DelayRangeInverted` when `max_ms < min_ms`.
    pub const fn new(min_ms: u64, max_ms: u64) -> Result<Self, ValidationError> {
        if max_ms < min_ms {
            return Err(ValidationError::DelayRangeInverted { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    #[must_use]
    pub const fn fixed(delay_ms: u64) -> Self {
        Self {
            min_ms: delay_ms,
            max_ms: delay_ms,
        }
    }

    #[must_use]
    pub const fn min_ms(&self) -> u64 {
        self.min_ms
    }

    #[must_use]
    pub const fn max_ms(&self) -> u64 {
        self.max_ms
    }
}

/// Parameters of a create batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPlan {
    count: NonZeroUsize,
    delay: DelayRange,
}

impl BatchPlan {
    /// # Errors
    ///
    /// Returns `CountZero` for an empty batch and `DelayRangeInverted` when
    /// the maximum delay is below the minimum.
    pub fn new(
        count: usize,
        delay_min_ms: u64,
        delay_max_ms: u64,
    ) -> Result<Self, ValidationError> {
        let count = NonZeroUsize::new(count).ok_or(ValidationError::CountZero)?;
        let delay = DelayRange::new(delay_min_ms, delay_max_ms)?;
        Ok(Self { count, delay })
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count.get()
    }

    #[must_use]
    pub const fn delay(&self) -> DelayRange {
        self.delay
    }

    /// Builds the create requests for this batch.
    ///
    /// Texts are `issue #<stamp>-<n>` with `n` counting from 1, so payloads
    /// stay distinct even when the whole batch shares one stamp.
    #[must_use]
    pub fn requests(&self, stamp: i64) -> Vec<OperationRequest> {
        (1..=self.count.get())
            .map(|seq| OperationRequest::create(&format!("issue #{}-{}", stamp, seq)))
            .collect()
    }
}
