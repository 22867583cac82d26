//! Core types and traits for the sift priority queue.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error taxonomy shared by every heap operation and the
//! [`Priority`] capability that decides which of two elements belongs
//! closer to the front of a queue.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod order;

pub use error::HeapError;
pub use order::{ByKey, DynOrder, MaxFirst, MinFirst, Priority};
