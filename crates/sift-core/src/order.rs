//! The ordering capability consumed by the heap.
//!
//! A heap never compares elements directly. It asks a [`Priority`]
//! value whether one element may precede another. Two styles of
//! ordering are supported through the same trait:
//!
//! - **Fixed:** a zero-sized type such as [`MinFirst`] or [`MaxFirst`]
//!   whose ordering is baked into the type.
//! - **Injected:** a closure or a [`DynOrder`] supplied as a value at
//!   construction, and replaceable afterwards.
//!
//! # Caller obligations
//!
//! The predicate must be a weak ordering over every set of elements
//! queued at the same time, must not panic, and must not read state
//! that changes between heap operations. The heap does not detect
//! violations; they silently break the heap invariant.

use std::cmp::Ordering;
use std::fmt;

/// Decides relative priority between two elements.
///
/// `are_ordered(a, b)` returns `true` when `a` must not come after `b`,
/// i.e. `a` may sit at or above `b` in the heap. Equal-priority
/// elements should return `true` in both directions.
pub trait Priority<T: ?Sized> {
    /// Whether `a` may precede `b`.
    fn are_ordered(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Priority<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn are_ordered(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first, by `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Priority<T> for MinFirst {
    #[inline]
    fn are_ordered(&self, a: &T, b: &T) -> bool {
        a.cmp(b) != Ordering::Greater
    }
}

/// Largest element first, by `Ord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Priority<T> for MaxFirst {
    #[inline]
    fn are_ordered(&self, a: &T, b: &T) -> bool {
        a.cmp(b) != Ordering::Less
    }
}

/// Smallest key first, where the key is extracted by `F`.
///
/// ```
/// use sift_core::{ByKey, Priority};
///
/// let by_rank = ByKey(|job: &(u32, char)| job.0);
/// assert!(by_rank.are_ordered(&(1, 'a'), &(2, 'b')));
/// assert!(!by_rank.are_ordered(&(3, 'c'), &(2, 'b')));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T, K, F> Priority<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn are_ordered(&self, a: &T, b: &T) -> bool {
        (self.0)(a) <= (self.0)(b)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByKey").field(&"<fn>").finish()
    }
}

/// A boxed, replaceable ordering predicate.
///
/// Used by heaps whose ordering is supplied at runtime and may be swapped
/// out later. Every `DynOrder` wraps a real function; there is no empty
/// state.
pub struct DynOrder<T: ?Sized> {
    predicate: Box<dyn Fn(&T, &T) -> bool>,
}

impl<T: ?Sized> DynOrder<T> {
    /// Wrap a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<T: ?Sized> Priority<T> for DynOrder<T> {
    #[inline]
    fn are_ordered(&self, a: &T, b: &T) -> bool {
        (self.predicate)(a, b)
    }
}

impl<T: ?Sized> fmt::Debug for DynOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynOrder").finish_non_exhaustive()
    }
}
