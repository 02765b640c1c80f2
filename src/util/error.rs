//! Shared error type for the kata utilities.

use thiserror::Error;

/// Failure modes across the utility modules.
///
/// The containers here are fixed-capacity by design; exceeding a capacity or
/// an index bound is an error, not a growth trigger.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UtilError {
    /// A container was created with capacity zero.
    #[error("capacity must be non-zero")]
    ZeroCapacity,

    /// An operation would exceed a fixed capacity.
    #[error("capacity {capacity} exceeded (needed {needed})")]
    CapacityExceeded { capacity: usize, needed: usize },

    /// An index fell outside a container's bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A decimal digit outside 0..=9 was supplied.
    #[error("invalid decimal digit {0}")]
    InvalidDigit(i64),

    /// An operation requiring an even-length slice saw an odd one.
    #[error("slice length {0} is odd")]
    OddLength(usize),

    /// A date string failed to parse or validate.
    #[error("invalid date: {0}")]
    InvalidDate(&'static str),

    /// Empty input where at least one element is required.
    #[error("input is empty")]
    Empty,
}
