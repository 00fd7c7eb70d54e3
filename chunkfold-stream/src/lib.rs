// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Chunked streaming aggregation over lazily produced integer sequences.
//!
//! The entry points are [`NumberSequence`], a lazy `1..size` producer, and
//! the [`FoldChunkedExt`] operator, which consumes any `Stream<Item = i64>`
//! in fixed-size batches while maintaining three running aggregates: the sum
//! of even values, the mean of odd values, and the count of values divisible
//! by 3. Peak memory stays O(1) in sequence length; batch boundaries pace
//! progress reporting only and never affect final results.
//!
//! ```rust
//! use chunkfold_stream::{aggregate_numbers, DEFAULT_CHUNK_SIZE};
//!
//! # async fn example() -> chunkfold_core::Result<()> {
//! let summary = aggregate_numbers(50_000, DEFAULT_CHUNK_SIZE).await?;
//! assert_eq!(summary.even_sum, 624_975_000);
//! # Ok(())
//! # }
//! ```

pub mod fold_chunked;
pub mod number_sequence;

pub use self::fold_chunked::{aggregate_numbers, FoldChunkedExt, DEFAULT_CHUNK_SIZE};
pub use self::number_sequence::NumberSequence;

pub use chunkfold_core::{AggregateSummary, BatchProgress, ChunkfoldError, Result};
