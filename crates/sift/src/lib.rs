//! sift: an indexed binary-heap priority queue.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the sift sub-crates. For most users, adding `sift` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sift::prelude::*;
//!
//! #[derive(Debug)]
//! struct Job {
//!     id: u32,
//!     deadline: u64,
//! }
//!
//! // Jobs are identified by id; the deadline may change while queued.
//! impl PartialEq for Job {
//!     fn eq(&self, other: &Self) -> bool {
//!         self.id == other.id
//!     }
//! }
//!
//! let mut queue = IndexedBinaryHeap::new(ByKey(|job: &Job| job.deadline));
//! queue.push(Job { id: 1, deadline: 10 });
//! queue.push(Job { id: 2, deadline: 20 });
//! queue.push(Job { id: 3, deadline: 30 });
//!
//! queue.reprioritize(Job { id: 3, deadline: 5 }).unwrap();
//! assert_eq!(queue.pop().unwrap().id, 3);
//! assert_eq!(queue.len(), 2);
//!
//! let mut empty: IndexedBinaryHeap<u8, MinFirst> = IndexedBinaryHeap::default();
//! assert!(matches!(empty.pop(), Err(HeapError::Empty { .. })));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sift-core` | `HeapError`, the `Priority` trait, stock orders |
//! | [`heap`] | `sift-heap` | `IndexedBinaryHeap`, `DynHeap`, `HeapConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy and ordering traits (`sift-core`).
///
/// Contains [`types::HeapError`], the [`types::Priority`] capability and
/// the stock orders [`types::MinFirst`], [`types::MaxFirst`],
/// [`types::ByKey`] and [`types::DynOrder`].
pub use sift_core as types;

/// The heap itself (`sift-heap`).
///
/// [`heap::IndexedBinaryHeap`] for fixed orders, [`heap::DynHeap`] for a
/// replaceable predicate, [`heap::HeapConfig`] for storage tuning.
pub use sift_heap as heap;

/// Common imports for typical sift usage.
///
/// ```rust
/// use sift::prelude::*;
/// ```
pub mod prelude {
    pub use sift_core::{ByKey, DynOrder, HeapError, MaxFirst, MinFirst, Priority};
    pub use sift_heap::{DynHeap, HeapConfig, IndexedBinaryHeap};
}
