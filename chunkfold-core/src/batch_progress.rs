// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-batch progress snapshot for side-effect observation.

/// Immutable snapshot of accumulator state after a completed batch.
///
/// Handed to progress observers by shared reference, for side effects only
/// (logging, metrics). Observers receive a copy of the partial counts and
/// cannot reach back into the accumulator; batch observation never affects
/// final results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// Number of full batches consumed so far (1-based at first emission).
    pub batches_completed: u64,
    /// Total values consumed so far.
    pub values_seen: i64,
    /// Partial sum of even values.
    pub even_sum: i64,
    /// Partial sum of odd values.
    pub odd_sum: i64,
    /// Partial count of odd values.
    pub odd_count: i64,
    /// Partial count of values divisible by 3.
    pub div3_count: i64,
}
