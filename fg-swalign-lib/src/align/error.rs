//! Errors raised while aligning a sequence pair.
use thiserror::Error;

/// The ways an alignment call can fail.  Either kind aborts the call before any result is
/// returned; storage that was already reserved is released before the error propagates.
#[derive(Debug, Error)]
pub enum AlignError {
    /// Memory for the alignment matrix or the result could not be reserved.
    #[error("Could not allocate storage for a {rows}x{cols} alignment")]
    Allocation {
        /// Number of rows (`alen + 1`)
        rows: usize,
        /// Number of columns (`blen + 1`)
        cols: usize,
    },

    /// The problem or the scoring cannot be aligned.  Detected before anything is allocated.
    #[error("Invalid alignment input: {0}")]
    InvalidInput(String),
}

impl AlignError {
    pub fn invalid<S: Into<String>>(reason: S) -> Self {
        Self::InvalidInput(reason.into())
    }
}
