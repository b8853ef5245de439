//! Failure values returned by list and cursor operations.
//!
//! Every failure is a recoverable value handed back to the caller; nothing
//! in this crate panics on bad input. Each failure class gets its own
//! variant so callers can match on exactly what went wrong.

use thiserror::Error;

use crate::bounds::Bounds;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    /// Constructor input where the element and weight sequences disagree
    /// in length.
    #[error("element and weight sequences differ in length ({elements} vs {weights})")]
    LengthMismatch { elements: usize, weights: usize },

    /// A weight outside the configured range. The weight never enters the
    /// store.
    #[error("weight {weight} is outside the permitted range {bounds}")]
    OutOfBounds { weight: f64, bounds: Bounds },

    /// A weight that would break the non-decreasing order at `index`.
    #[error("weight {weight} would break weight order at index {index}")]
    WouldUnorder { index: usize, weight: f64 },

    /// An index outside the legal range for the requested operation.
    /// Insertion points range over `0..=len`, element positions over
    /// `0..len`.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// An offset/length pair that does not fit the source slice.
    #[error("range {offset}..{offset}+{len} is out of range for a slice of length {slice_len}")]
    SliceOutOfRange { offset: usize, len: usize, slice_len: usize },

    /// A cursor stepped past the end it was walking toward.
    #[error("cursor has run off the end of the list")]
    Exhausted,

    /// A cursor mutation with no current element to act on.
    #[error("cursor has no current element")]
    NoCurrent,

    /// An operation the list refuses on principle.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
