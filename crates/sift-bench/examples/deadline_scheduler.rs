//! Earliest-deadline-first scheduling example.
//!
//! Demonstrates: queue tasks → run the most urgent → escalate a waiting
//! task with `reprioritize` → drain the rest in order.

use sift_heap::IndexedBinaryHeap;
use sift_test_utils::{by_priority, Task};

fn main() {
    println!("=== sift deadline scheduler ===\n");

    let mut queue = IndexedBinaryHeap::new(by_priority);
    queue.extend([
        Task::new(1, "compact-logs", 40),
        Task::new(2, "send-digest", 15),
        Task::new(3, "rotate-keys", 30),
        Task::new(4, "refresh-cache", 20),
    ]);
    println!(
        "queued {} tasks (capacity {})",
        queue.len(),
        queue.capacity()
    );

    let first = queue.pop().unwrap();
    println!("run  {first}");

    // An operator pulls key rotation forward.
    let rotate = queue
        .iter()
        .find(|t| t.name == "rotate-keys")
        .unwrap()
        .clone();
    queue.reprioritize(rotate.with_priority(5)).unwrap();
    println!("next {}", queue.peek().unwrap());

    for task in queue.drain_ordered() {
        println!("run  {task}");
    }
    assert!(queue.is_empty());
}
