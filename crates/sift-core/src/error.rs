//! Error types for the sift priority queue.
//!
//! Every fallible heap operation reports one of two classes of failure:
//! a bad argument supplied at construction or reset, or an operation
//! whose precondition does not hold for the current queue contents.
//! Neither class mutates the queue.

use std::error::Error;
use std::fmt;

/// Errors returned by heap construction and heap operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// A construction or configuration argument was rejected, e.g. a
    /// negative initial capacity or a zero minimum growth capacity.
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// The operation needs at least one queued element.
    Empty {
        /// Name of the operation that was attempted (`"peek"`, `"pop"`,
        /// `"remove_front"`).
        operation: &'static str,
    },
    /// `reprioritize` was asked to relocate an element that no queued
    /// element compares equal to.
    NotQueued,
}

impl HeapError {
    /// Returns `true` for precondition failures (`Empty`, `NotQueued`)
    /// as opposed to rejected arguments.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::Empty { .. } | Self::NotQueued)
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Empty { operation } => write!(f, "{operation} called on an empty heap"),
            Self::NotQueued => write!(f, "item is not queued"),
        }
    }
}

impl Error for HeapError {}
