//! Array-backed binary heap ordered by a [`Priority`] value.
//!
//! [`IndexedBinaryHeap`] keeps its live elements in `data[..len]` laid out
//! as an implicit binary tree: the parent of slot `i > 0` is `(i - 1) / 2`
//! and its children are `2i + 1` and `2i + 2`. The invariant maintained
//! by every operation is
//!
//! ```text
//! for all live i > 0:  order.are_ordered(data[parent(i)], data[i])
//! ```
//!
//! so `data[0]` is always an element nothing else must precede.
//!
//! # Capacity
//!
//! Capacity is tracked logically and only grows. An empty heap built
//! without an initial capacity allocates nothing; the first push reserves
//! [`HeapConfig::min_capacity`] slots and every push that finds the heap
//! full doubles the reservation. [`clear`](IndexedBinaryHeap::clear)
//! keeps the reservation for reuse.

use std::fmt;
use std::iter::FusedIterator;

use sift_core::{HeapError, Priority};
use tracing::{debug, trace};

use crate::config::HeapConfig;

#[inline]
fn parent_of(idx: usize) -> usize {
    (idx - 1) / 2
}

#[inline]
fn left_child_of(idx: usize) -> usize {
    2 * idx + 1
}

/// A priority queue over `T` ordered by `O`.
///
/// `O` is either a zero-sized fixed order such as
/// [`MinFirst`](sift_core::MinFirst), a closure, or a boxed
/// [`DynOrder`](sift_core::DynOrder) (see [`DynHeap`](crate::DynHeap)).
///
/// ```
/// use sift_heap::IndexedBinaryHeap;
///
/// let mut heap = IndexedBinaryHeap::new(|a: &(u32, char), b: &(u32, char)| a.0 <= b.0);
/// for job in [(5, 'e'), (1, 'a'), (3, 'c')] {
///     heap.push(job);
/// }
/// assert_eq!(heap.pop(), Ok((1, 'a')));
/// assert_eq!(heap.peek(), Ok(&(3, 'c')));
/// ```
#[derive(Clone)]
pub struct IndexedBinaryHeap<T, O> {
    /// Live elements in heap order. `data.len()` is the live size.
    data: Vec<T>,
    /// Logical capacity. Grows by doubling, never shrinks.
    capacity: usize,
    /// First allocation size when growing from zero capacity.
    min_capacity: usize,
    order: O,
}

impl<T, O: Priority<T>> IndexedBinaryHeap<T, O> {
    /// Create an empty heap. Nothing is allocated until the first push.
    pub fn new(order: O) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            min_capacity: HeapConfig::DEFAULT_MIN_CAPACITY,
            order,
        }
    }

    /// Create an empty heap with exactly `capacity` slots reserved.
    ///
    /// A capacity of zero allocates nothing.
    pub fn with_capacity(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            min_capacity: HeapConfig::DEFAULT_MIN_CAPACITY,
            order,
        }
    }

    /// Create an empty heap from a signed capacity.
    ///
    /// Returns [`HeapError::InvalidArgument`] if `capacity` is negative.
    pub fn try_with_capacity(capacity: isize, order: O) -> Result<Self, HeapError> {
        Self::with_config(HeapConfig::from_signed(capacity)?, order)
    }

    /// Create an empty heap from a validated [`HeapConfig`].
    pub fn with_config(config: HeapConfig, order: O) -> Result<Self, HeapError> {
        config.validate()?;
        let mut heap = Self::with_capacity(config.initial_capacity, order);
        heap.min_capacity = config.min_capacity;
        Ok(heap)
    }

    /// Build a heap from arbitrary elements in O(n).
    ///
    /// Capacity starts at `items.len()`.
    pub fn from_vec(items: Vec<T>, order: O) -> Self {
        let capacity = items.len();
        let mut heap = Self {
            data: items,
            capacity,
            min_capacity: HeapConfig::DEFAULT_MIN_CAPACITY,
            order,
        };
        for idx in (0..heap.data.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    /// Number of queued elements.
    #[doc(alias = "count")]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no elements are queued.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of slots reserved, live or not.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The ordering in use.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Live elements in heap (storage) order. Only `as_slice()[0]` has a
    /// guaranteed position.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate live elements in heap (storage) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The front element.
    ///
    /// Returns [`HeapError::Empty`] if nothing is queued.
    #[doc(alias = "front")]
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or_else(|| empty("peek"))
    }

    /// Queue `item`. Amortized O(log n).
    pub fn push(&mut self, item: T) {
        self.grow_to(self.data.len() + 1);
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the front element. O(log n).
    ///
    /// Returns [`HeapError::Empty`] if nothing is queued.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.take_front("pop")
    }

    /// Remove the front element without returning it. O(log n).
    ///
    /// Returns [`HeapError::Empty`] if nothing is queued.
    pub fn remove_front(&mut self) -> Result<(), HeapError> {
        self.take_front("remove_front").map(drop)
    }

    /// Drop every queued element. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Clear the heap and install a new ordering.
    pub fn reset_order(&mut self, order: O) {
        debug!(discarded = self.data.len(), "heap reset with new ordering");
        self.clear();
        self.order = order;
    }

    /// Make room for at least `additional` more elements, doubling the
    /// current capacity as many times as needed.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes, like
    /// [`Vec::reserve`].
    pub fn reserve(&mut self, additional: usize) {
        self.grow_to(self.data.len().saturating_add(additional));
    }

    /// Consume the heap, returning its elements in priority order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        sorted.extend(self.drain_ordered());
        sorted
    }

    /// Pop elements in priority order through an iterator.
    ///
    /// The heap is empty once the iterator is dropped, even if it was not
    /// run to completion. Capacity is kept.
    pub fn drain_ordered(&mut self) -> DrainOrdered<'_, T, O> {
        DrainOrdered { heap: self }
    }

    fn take_front(&mut self, operation: &'static str) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(empty(operation));
        }
        // Moves the last live element into slot 0 and releases its old slot.
        let front = self.data.swap_remove(0);
        if self.data.len() > 1 {
            self.sift_down(0);
        }
        Ok(front)
    }

    fn grow_to(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }
        let old_capacity = self.capacity;
        let mut new_capacity = if old_capacity == 0 {
            self.min_capacity
        } else {
            old_capacity
        };
        while new_capacity < required {
            new_capacity = new_capacity.saturating_mul(2);
        }
        self.data.reserve_exact(new_capacity - self.data.len());
        self.capacity = new_capacity;
        debug!(
            old_capacity,
            new_capacity,
            len = self.data.len(),
            "grew heap storage"
        );
    }

    /// Move the element at `idx` towards the root until its parent may
    /// precede it. Returns its final slot.
    fn sift_up(&mut self, mut idx: usize) -> usize {
        while idx > 0 {
            let parent = parent_of(idx);
            if self.order.are_ordered(&self.data[parent], &self.data[idx]) {
                break;
            }
            self.data.swap(parent, idx);
            idx = parent;
        }
        idx
    }

    /// Move the element at `idx` towards the leaves, always trading places
    /// with whichever child ranks first. Returns its final slot.
    fn sift_down(&mut self, mut idx: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = left_child_of(idx);
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len
                && !self.order.are_ordered(&self.data[left], &self.data[right])
            {
                right
            } else {
                left
            };
            if self.order.are_ordered(&self.data[idx], &self.data[child]) {
                break;
            }
            self.data.swap(idx, child);
            idx = child;
        }
        idx
    }
}

impl<T: PartialEq, O: Priority<T>> IndexedBinaryHeap<T, O> {
    /// Whether some queued element compares equal to `item`. O(n).
    pub fn contains(&self, item: &T) -> bool {
        self.data.iter().any(|queued| queued == item)
    }

    /// Relocate a queued element after its priority changed.
    ///
    /// Finds the first queued element equal to `item`, overwrites it with
    /// `item` and sifts it in the one direction that can restore the
    /// invariant. The equality contract of `T` must identify the same
    /// logical element regardless of its priority fields.
    ///
    /// Returns [`HeapError::NotQueued`] if no element matches; the heap is
    /// left untouched. O(n) search, O(log n) repair.
    pub fn reprioritize(&mut self, item: T) -> Result<(), HeapError> {
        let Some(idx) = self.data.iter().position(|queued| *queued == item) else {
            trace!(operation = "reprioritize", "item not queued");
            return Err(HeapError::NotQueued);
        };
        self.data[idx] = item;

        if idx == 0 {
            self.sift_down(idx);
        } else if left_child_of(idx) >= self.data.len() {
            self.sift_up(idx);
        } else if !self
            .order
            .are_ordered(&self.data[parent_of(idx)], &self.data[idx])
        {
            self.sift_up(idx);
        } else {
            self.sift_down(idx);
        }
        Ok(())
    }
}

impl<T, O: Priority<T> + Default> Default for IndexedBinaryHeap<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: Priority<T>> Extend<T> for IndexedBinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a IndexedBinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug, O: fmt::Debug> fmt::Debug for IndexedBinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedBinaryHeap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .field("order", &self.order)
            .finish()
    }
}

fn empty(operation: &'static str) -> HeapError {
    trace!(operation, "precondition failed: heap is empty");
    HeapError::Empty { operation }
}

/// Iterator returned by [`IndexedBinaryHeap::drain_ordered`].
pub struct DrainOrdered<'a, T, O: Priority<T>> {
    heap: &'a mut IndexedBinaryHeap<T, O>,
}

impl<T, O: Priority<T>> Iterator for DrainOrdered<'_, T, O> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        self.heap.take_front("drain_ordered").ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, O: Priority<T>> ExactSizeIterator for DrainOrdered<'_, T, O> {}

impl<T, O: Priority<T>> FusedIterator for DrainOrdered<'_, T, O> {}

impl<T, O: Priority<T>> Drop for DrainOrdered<'_, T, O> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}

impl<T: fmt::Debug, O: Priority<T>> fmt::Debug for DrainOrdered<'_, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrainOrdered")
            .field("remaining", &self.heap.as_slice())
            .finish()
    }
}
