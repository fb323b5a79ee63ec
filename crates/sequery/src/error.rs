//! Error types for the sequery crate.

use thiserror::Error;

/// Errors raised by operators that cannot produce a result.
///
/// Every `..._or_default` operator suppresses all of these and returns the
/// element type's default value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The operation needs at least one element, but the sequence is empty.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// No element satisfied the predicate.
    #[error("no element satisfies the predicate")]
    NoMatch,

    /// Exactly one (matching) element was required.
    #[error("sequence does not contain exactly one element (found {found})")]
    NotExactlyOne { found: usize },

    /// The index falls outside `[0, len)`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
