// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mutable accumulator state for one aggregation pass.

use crate::aggregate_summary::AggregateSummary;
use crate::batch_progress::BatchProgress;

/// Running accumulator for the three tracked statistics.
///
/// One instance is exclusively owned by a single aggregation pass: values
/// are fed in through [`observe`](Self::observe), partial state can be
/// snapshotted for progress reporting, and the pass ends by converting the
/// accumulator into an [`AggregateSummary`] with [`finish`](Self::finish).
///
/// The even/odd branch and the divisible-by-3 count are independent: a
/// value such as `6` contributes to both `even_sum` and `div3_count`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunningAggregate {
    even_sum: i64,
    odd_sum: i64,
    odd_count: i64,
    div3_count: i64,
    values_seen: i64,
}

impl RunningAggregate {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value into the accumulator.
    pub fn observe(&mut self, value: i64) {
        if value % 2 == 0 {
            self.even_sum += value;
        } else {
            self.odd_sum += value;
            self.odd_count += 1;
        }
        if value % 3 == 0 {
            self.div3_count += 1;
        }
        self.values_seen += 1;
    }

    /// Sum of even values observed so far.
    #[must_use]
    pub const fn even_sum(&self) -> i64 {
        self.even_sum
    }

    /// Sum of odd values observed so far.
    #[must_use]
    pub const fn odd_sum(&self) -> i64 {
        self.odd_sum
    }

    /// Count of odd values observed so far.
    #[must_use]
    pub const fn odd_count(&self) -> i64 {
        self.odd_count
    }

    /// Count of values divisible by 3 observed so far.
    #[must_use]
    pub const fn div3_count(&self) -> i64 {
        self.div3_count
    }

    /// Total number of values observed so far.
    #[must_use]
    pub const fn values_seen(&self) -> i64 {
        self.values_seen
    }

    /// Arithmetic mean of the odd values observed so far.
    ///
    /// Returns the sentinel `0.0` when no odd value has been observed;
    /// an empty pass yields a defined mean rather than a division fault.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn odd_mean(&self) -> f64 {
        if self.odd_count == 0 {
            0.0
        } else {
            self.odd_sum as f64 / self.odd_count as f64
        }
    }

    /// Capture an immutable progress snapshot after a completed batch.
    #[must_use]
    pub const fn snapshot(&self, batches_completed: u64) -> BatchProgress {
        BatchProgress {
            batches_completed,
            values_seen: self.values_seen,
            even_sum: self.even_sum,
            odd_sum: self.odd_sum,
            odd_count: self.odd_count,
            div3_count: self.div3_count,
        }
    }

    /// Consume the accumulator and produce the final summary.
    #[must_use]
    pub fn finish(self) -> AggregateSummary {
        AggregateSummary {
            even_sum: self.even_sum,
            odd_mean: self.odd_mean(),
            div3_count: self.div3_count,
        }
    }
}
