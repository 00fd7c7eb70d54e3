// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy producer of the sequence `1..size`.

use chunkfold_core::{ChunkfoldError, Result};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Lazy, finite stream of the integers `1..size` (upper bound exclusive),
/// in increasing order.
///
/// The producer holds only its cursor and the last value to emit; it
/// never buffers ahead, so peak memory is O(1) regardless of `size`. Each
/// instance is consumed once; a new pass is started by constructing a new
/// instance with the same `size`.
///
/// # Examples
///
/// ```rust
/// use chunkfold_stream::NumberSequence;
/// use futures::StreamExt;
///
/// # async fn example() -> chunkfold_core::Result<()> {
/// let values: Vec<i64> = NumberSequence::new(4)?.collect().await;
/// assert_eq!(values, vec![1, 2, 3]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NumberSequence {
    next: i64,
    last: i64,
}

impl NumberSequence {
    /// Create a producer for the sequence `1..size` (upper bound exclusive).
    ///
    /// A `size` of 0 or 1 produces an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkfoldError::InvalidArgument`] if `size` is negative.
    pub fn new(size: i64) -> Result<Self> {
        if size < 0 {
            return Err(ChunkfoldError::invalid_argument(
                "size",
                format!("must be non-negative, got {size}"),
            ));
        }
        Ok(Self {
            next: 1,
            last: size - 1,
        })
    }

    /// Number of values not yet produced.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn remaining(&self) -> usize {
        if self.next > self.last {
            0
        } else {
            (self.last - self.next + 1) as usize
        }
    }
}

impl Stream for NumberSequence {
    type Item = i64;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.next > self.last {
            return Poll::Ready(None);
        }
        let value = self.next;
        self.next += 1;
        Poll::Ready(Some(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}
