//! Test utilities and fixtures for sift development.
//!
//! Provides an invariant checker that works on any live heap slice, a
//! reference ordering for comparing pop sequences, and the [`Task`]
//! fixture whose equality ignores its priority.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{by_priority, Task};

use std::fmt::Debug;

use sift_core::Priority;

/// Index of the first live slot whose parent must not precede it.
pub fn first_invariant_violation<T, O: Priority<T>>(live: &[T], order: &O) -> Option<usize> {
    (1..live.len()).find(|&i| !order.are_ordered(&live[(i - 1) / 2], &live[i]))
}

/// Panic with the offending parent/child pair if `live` is not a heap
/// under `order`.
pub fn assert_heap_invariant<T: Debug, O: Priority<T>>(live: &[T], order: &O) {
    if let Some(i) = first_invariant_violation(live, order) {
        let parent = (i - 1) / 2;
        panic!(
            "heap invariant violated at slot {i}: parent[{parent}] = {:?} must not precede child {:?}\nheap: {live:?}",
            live[parent], live[i]
        );
    }
}

/// Stable sort of `items` under a `Priority` predicate.
///
/// Used as the reference a full pop sequence is compared against.
/// Ties keep their input order, so compare keys rather than whole
/// elements when the heap may break ties differently.
pub fn reference_order<T, O: Priority<T>>(mut items: Vec<T>, order: &O) -> Vec<T> {
    items.sort_by(|a, b| match (order.are_ordered(a, b), order.are_ordered(b, a)) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => std::cmp::Ordering::Equal,
    });
    items
}
