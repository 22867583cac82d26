//! Heaps whose ordering is supplied at runtime and can be replaced.

use sift_core::{DynOrder, HeapError};

use crate::config::HeapConfig;
use crate::heap::IndexedBinaryHeap;

/// A heap ordered by a boxed predicate that can be swapped with
/// [`reset`](IndexedBinaryHeap::reset).
pub type DynHeap<T> = IndexedBinaryHeap<T, DynOrder<T>>;

impl<T> IndexedBinaryHeap<T, DynOrder<T>> {
    /// Create an empty heap ordered by `predicate`.
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self::new(DynOrder::new(predicate))
    }

    /// Create an empty heap ordered by `predicate`, with storage set up
    /// from a validated [`HeapConfig`].
    pub fn from_fn_with_config<F>(config: HeapConfig, predicate: F) -> Result<Self, HeapError>
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self::with_config(config, DynOrder::new(predicate))
    }

    /// Discard every queued element and order future elements by
    /// `predicate`. Capacity is kept.
    pub fn reset<F>(&mut self, predicate: F)
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        self.reset_order(DynOrder::new(predicate));
    }
}
