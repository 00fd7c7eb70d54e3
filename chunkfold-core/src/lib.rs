// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for chunked streaming aggregation.
//!
//! This crate holds the runtime-agnostic pieces of the chunkfold workspace:
//! the [`RunningAggregate`] accumulator, the final [`AggregateSummary`], the
//! per-batch [`BatchProgress`] snapshot, and the [`ChunkfoldError`] type.
//! Stream plumbing lives in `chunkfold-stream`.

pub mod aggregate_summary;
pub mod batch_progress;
pub mod error;
pub mod running_aggregate;

pub use self::aggregate_summary::AggregateSummary;
pub use self::batch_progress::BatchProgress;
pub use self::error::{ChunkfoldError, Result};
pub use self::running_aggregate::RunningAggregate;
