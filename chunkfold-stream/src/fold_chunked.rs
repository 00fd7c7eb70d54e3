// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Chunked fold operator for streaming aggregation.

use crate::number_sequence::NumberSequence;
use chunkfold_core::{AggregateSummary, BatchProgress, ChunkfoldError, Result, RunningAggregate};
use futures::{pin_mut, Stream, StreamExt};
use std::future::Future;

/// Default batch size for chunked aggregation.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Extension trait providing the `fold_chunked` operator for integer streams.
///
/// The operator consumes the stream to exhaustion, one value per pull, and
/// maintains a [`RunningAggregate`] across the whole pass. Values are grouped
/// logically into batches of `chunk_size`; after each completed batch a
/// [`BatchProgress`] snapshot is emitted for observation. Batch boundaries
/// pace progress reporting only — the final [`AggregateSummary`] is identical
/// for every valid `chunk_size`.
pub trait FoldChunkedExt: Stream<Item = i64> + Sized {
    /// Aggregates the stream in batches of `chunk_size`, reporting progress
    /// through `tracing` debug events only.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkfoldError::InvalidArgument`] if `chunk_size` is 0. The
    /// check runs before any value is pulled from the stream.
    fn fold_chunked(
        self,
        chunk_size: usize,
    ) -> impl Future<Output = Result<AggregateSummary>> {
        self.fold_chunked_with(chunk_size, |_| {})
    }

    /// Aggregates the stream in batches of `chunk_size`, invoking `on_batch`
    /// with a progress snapshot after every completed batch.
    ///
    /// The observer is called for side effects only; it receives the snapshot
    /// by shared reference and cannot alter accumulator state. A trailing
    /// partial batch is fully accumulated but emits no observation.
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Number of values per batch (must be at least 1)
    /// * `on_batch` - Observer invoked after each completed batch
    ///
    /// # Errors
    ///
    /// Returns [`ChunkfoldError::InvalidArgument`] if `chunk_size` is 0; in
    /// that case the stream is untouched and the observer is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chunkfold_stream::{FoldChunkedExt, NumberSequence};
    ///
    /// # async fn example() -> chunkfold_core::Result<()> {
    /// let mut batches = 0;
    /// let summary = NumberSequence::new(25)?
    ///     .fold_chunked_with(10, |progress| {
    ///         batches = progress.batches_completed;
    ///     })
    ///     .await?;
    /// assert_eq!(batches, 2); // the trailing 4 values emit no observation
    /// assert_eq!(summary.div3_count, 8);
    /// # Ok(())
    /// # }
    /// ```
    fn fold_chunked_with<F>(
        self,
        chunk_size: usize,
        on_batch: F,
    ) -> impl Future<Output = Result<AggregateSummary>>
    where
        F: FnMut(&BatchProgress);
}

impl<S> FoldChunkedExt for S
where
    S: Stream<Item = i64> + Sized,
{
    fn fold_chunked_with<F>(
        self,
        chunk_size: usize,
        on_batch: F,
    ) -> impl Future<Output = Result<AggregateSummary>>
    where
        F: FnMut(&BatchProgress),
    {
        fold_chunked_impl(self, chunk_size, on_batch)
    }
}

async fn fold_chunked_impl<S, F>(
    stream: S,
    chunk_size: usize,
    mut on_batch: F,
) -> Result<AggregateSummary>
where
    S: Stream<Item = i64>,
    F: FnMut(&BatchProgress),
{
    if chunk_size == 0 {
        return Err(ChunkfoldError::invalid_argument(
            "chunk_size",
            "must be at least 1",
        ));
    }

    let mut aggregate = RunningAggregate::new();
    let mut in_batch = 0usize;
    let mut batches_completed = 0u64;

    pin_mut!(stream);
    while let Some(value) = stream.next().await {
        aggregate.observe(value);
        in_batch += 1;
        if in_batch == chunk_size {
            in_batch = 0;
            batches_completed += 1;
            let progress = aggregate.snapshot(batches_completed);
            tracing::debug!(
                batches_completed = progress.batches_completed,
                values_seen = progress.values_seen,
                even_sum = progress.even_sum,
                odd_sum = progress.odd_sum,
                odd_count = progress.odd_count,
                div3_count = progress.div3_count,
                "batch completed"
            );
            on_batch(&progress);
        }
    }

    Ok(aggregate.finish())
}

/// Aggregates the sequence `1..size` in batches of `chunk_size`.
///
/// Convenience driver wiring a [`NumberSequence`] into
/// [`FoldChunkedExt::fold_chunked`]. Both arguments are validated before any
/// value is produced.
///
/// # Errors
///
/// Returns [`ChunkfoldError::InvalidArgument`] if `size` is negative or
/// `chunk_size` is 0.
pub async fn aggregate_numbers(size: i64, chunk_size: usize) -> Result<AggregateSummary> {
    NumberSequence::new(size)?.fold_chunked(chunk_size).await
}
