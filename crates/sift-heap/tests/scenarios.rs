//! Integration test: end-to-end queue scenarios.
//!
//! Covers key-ordered popping, clearing and reuse, growth past the
//! reserved capacity, size accounting, and the error surface of empty
//! heaps and rejected construction arguments.

use proptest::prelude::*;
use sift_core::{HeapError, MinFirst};
use sift_heap::{DynHeap, HeapConfig, IndexedBinaryHeap};
use sift_test_utils::{assert_heap_invariant, by_priority, Task};

fn lower_key_first(a: &(u32, &'static str), b: &(u32, &'static str)) -> bool {
    a.0 <= b.0
}

#[test]
fn pops_lowest_key_first() {
    let mut heap = IndexedBinaryHeap::new(lower_key_first);
    for entry in [(5, "e"), (1, "a"), (3, "c"), (2, "b"), (4, "d")] {
        heap.push(entry);
    }

    let mut names = Vec::new();
    while let Ok((_, name)) = heap.pop() {
        names.push(name);
    }
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
}

#[test]
fn cleared_heap_behaves_fresh() {
    let mut heap = IndexedBinaryHeap::new(by_priority);
    heap.push(Task::new(1, "a", 1));
    heap.push(Task::new(2, "b", 2));
    heap.push(Task::new(3, "c", 3));

    heap.clear();
    assert_eq!(heap.len(), 0);
    assert!(heap.is_empty());
    assert!(!heap.contains(&Task::new(1, "a", 1)));

    heap.push(Task::new(4, "d", 20));
    heap.push(Task::new(5, "e", 10));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop().unwrap().id, 5);
    assert_eq!(heap.pop().unwrap().id, 4);
    assert!(heap.pop().is_err());
}

#[test]
fn growth_past_capacity_keeps_every_element() {
    let mut heap = IndexedBinaryHeap::with_capacity(8, MinFirst);
    for value in (0..9u32).rev() {
        heap.push(value);
    }
    assert_eq!(heap.capacity(), 16);
    assert_eq!(heap.into_sorted_vec(), (0..9).collect::<Vec<_>>());
}

#[test]
fn remove_front_discards_without_returning() {
    let mut heap = IndexedBinaryHeap::new(MinFirst);
    heap.extend([4, 2, 8]);
    heap.remove_front().unwrap();
    assert_eq!(heap.peek(), Ok(&4));
    assert_eq!(heap.len(), 2);
}

#[test]
fn empty_heap_reports_invalid_operation() {
    let mut heap: IndexedBinaryHeap<Task, _> = IndexedBinaryHeap::new(by_priority);
    for err in [
        heap.peek().map(|_| ()).unwrap_err(),
        heap.pop().map(|_| ()).unwrap_err(),
        heap.remove_front().unwrap_err(),
    ] {
        assert!(err.is_invalid_operation(), "{err}");
    }
    assert!(heap.is_empty());
}

#[test]
fn rejected_construction_arguments() {
    let err = IndexedBinaryHeap::<u8, _>::try_with_capacity(-1, MinFirst).unwrap_err();
    assert_eq!(
        err,
        HeapError::InvalidArgument {
            reason: "capacity must be non-negative, got -1".into(),
        }
    );

    let bad = HeapConfig {
        initial_capacity: 4,
        min_capacity: 0,
    };
    assert!(IndexedBinaryHeap::<u8, _>::with_config(bad, MinFirst).is_err());
}

#[test]
fn injected_order_can_be_replaced() {
    let mut heap: DynHeap<Task> = DynHeap::from_fn(by_priority);
    heap.push(Task::new(1, "low", 1));
    heap.push(Task::new(2, "high", 9));
    assert_eq!(heap.peek().unwrap().id, 1);

    heap.reset(|a: &Task, b: &Task| a.priority >= b.priority);
    assert!(heap.is_empty());
    heap.push(Task::new(1, "low", 1));
    heap.push(Task::new(2, "high", 9));
    assert_eq!(heap.peek().unwrap().id, 2);
}

proptest! {
    #[test]
    fn len_tracks_pushes_minus_pops(
        keys in proptest::collection::vec(any::<i32>(), 0..100),
        pops in 0usize..120,
    ) {
        let mut heap = IndexedBinaryHeap::new(MinFirst);
        heap.extend(keys.iter().copied());
        let mut popped = 0;
        for _ in 0..pops {
            if heap.pop().is_ok() {
                popped += 1;
            }
        }
        prop_assert_eq!(popped, pops.min(keys.len()));
        prop_assert_eq!(heap.len(), keys.len() - popped);
        prop_assert_eq!(heap.is_empty(), heap.len() == 0);
        assert_heap_invariant(heap.as_slice(), heap.order());
    }

    #[test]
    fn growth_loses_nothing(initial in 0usize..8, count in 0usize..100) {
        let mut heap = IndexedBinaryHeap::with_capacity(initial, MinFirst);
        for value in 0..count {
            heap.push(value);
            prop_assert!(heap.capacity() >= heap.len());
        }
        prop_assert_eq!(heap.into_sorted_vec(), (0..count).collect::<Vec<_>>());
    }
}
