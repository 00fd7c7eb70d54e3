// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Final result of one aggregation pass.

/// Final aggregates computed over a fully consumed sequence.
///
/// Produced by [`RunningAggregate::finish`](crate::RunningAggregate::finish)
/// exactly once per pass, on sequence exhaustion. `odd_mean` is the sentinel
/// `0.0` when the pass saw no odd values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateSummary {
    /// Sum of all even values in the sequence.
    pub even_sum: i64,
    /// Arithmetic mean of all odd values, or `0.0` if none were seen.
    pub odd_mean: f64,
    /// Count of values divisible by 3.
    pub div3_count: i64,
}

impl AggregateSummary {
    /// The summary as a `(even_sum, odd_mean, div3_count)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (i64, f64, i64) {
        (self.even_sum, self.odd_mean, self.div3_count)
    }
}
