// Copyright 2025 Chunkfold Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for chunkfold operations.
//!
//! All argument validation happens at operation entry; once an aggregation
//! pass is running it cannot fail. The error surface is therefore small: a
//! single [`ChunkfoldError::InvalidArgument`] variant that names the
//! offending argument and explains the constraint it violated.
//!
//! # Examples
//!
//! ```
//! use chunkfold_core::{ChunkfoldError, Result};
//!
//! fn check_chunk_size(chunk_size: usize) -> Result<()> {
//!     if chunk_size == 0 {
//!         return Err(ChunkfoldError::invalid_argument(
//!             "chunk_size",
//!             "must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

/// Root error type for all chunkfold operations.
///
/// Invalid arguments are rejected synchronously, before any value is pulled
/// from the sequence producer; no partial accumulation or progress emission
/// precedes the failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkfoldError {
    /// An operation argument failed boundary validation.
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the argument that failed validation.
        argument: &'static str,
        /// Description of the constraint the value violated.
        reason: String,
    },
}

impl ChunkfoldError {
    /// Create an invalid-argument error for the named argument.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Name of the argument this error refers to.
    #[must_use]
    pub const fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { argument, .. } => argument,
        }
    }
}

/// Specialized Result type for chunkfold operations.
pub type Result<T> = std::result::Result<T, ChunkfoldError>;
