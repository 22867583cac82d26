//! Heap configuration parameters.

use sift_core::HeapError;

/// Configuration for a heap's backing storage.
///
/// Controls how much storage is reserved up front and how large the first
/// allocation is when the heap starts out empty. Validated when the heap
/// is constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    /// Number of slots reserved at construction.
    ///
    /// Default: 0, meaning nothing is allocated until the first push.
    pub initial_capacity: usize,

    /// Size of the first allocation when the heap grows from zero capacity.
    ///
    /// Default: 4. Must be at least 1. Every later growth doubles the
    /// current capacity.
    pub min_capacity: usize,
}

impl HeapConfig {
    /// Default initial capacity: allocate lazily.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Default size of the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 4;

    /// Create a config that reserves `initial_capacity` slots up front.
    ///
    /// Uses the default minimum capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
        }
    }

    /// Create a config from a signed capacity, rejecting negative values.
    pub fn from_signed(initial_capacity: isize) -> Result<Self, HeapError> {
        let initial_capacity =
            usize::try_from(initial_capacity).map_err(|_| HeapError::InvalidArgument {
                reason: format!("capacity must be non-negative, got {initial_capacity}"),
            })?;
        Ok(Self::new(initial_capacity))
    }

    /// Check that the configuration can drive a heap.
    pub fn validate(&self) -> Result<(), HeapError> {
        if self.min_capacity == 0 {
            return Err(HeapError::InvalidArgument {
                reason: "min_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
