//! Indexed binary-heap priority queue with in-place reprioritization.
//!
//! [`IndexedBinaryHeap`] is an array-backed binary heap ordered by any
//! [`Priority`](sift_core::Priority) value. Beyond the usual push/pop it
//! can relocate an element whose priority changed while it was queued
//! ([`reprioritize`](IndexedBinaryHeap::reprioritize)).
//!
//! # Ordering modes
//!
//! ```text
//! IndexedBinaryHeap<T, O: Priority<T>>
//! ├── O = MinFirst / MaxFirst / ByKey<F>   fixed, zero-sized or captured
//! ├── O = impl Fn(&T, &T) -> bool          fixed closure or fn item
//! └── O = DynOrder<T>  (DynHeap<T>)        injected, replaceable via reset()
//! ```
//!
//! # Threading
//!
//! The heap is a plain single-owner value with no internal locking.
//! Share it across threads by wrapping the whole heap in a mutex.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dynamic;
pub mod heap;

pub use config::HeapConfig;
pub use dynamic::DynHeap;
pub use heap::{DrainOrdered, IndexedBinaryHeap};
