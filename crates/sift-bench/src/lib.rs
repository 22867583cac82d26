//! Workload profiles and utilities for benchmarking sift heaps.
//!
//! Provides deterministic, seeded workloads:
//!
//! - [`reference_profile`]: 10K tasks, 1K priority updates
//! - [`stress_profile`]: 100K tasks, 10K priority updates
//! - [`priorities`] / [`tasks`] / [`updates`]: the generated inputs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sift_test_utils::Task;

/// Shape of a benchmark workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkloadProfile {
    /// Number of tasks queued up front.
    pub task_count: usize,
    /// Number of `(task index, new priority)` updates applied afterwards.
    pub update_count: usize,
    /// Priorities are drawn from `0..priority_range`.
    pub priority_range: u64,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// 10K tasks with 1K priority updates.
pub fn reference_profile(seed: u64) -> WorkloadProfile {
    WorkloadProfile {
        task_count: 10_000,
        update_count: 1_000,
        priority_range: 1_000_000,
        seed,
    }
}

/// 100K tasks with 10K priority updates.
pub fn stress_profile(seed: u64) -> WorkloadProfile {
    WorkloadProfile {
        task_count: 100_000,
        update_count: 10_000,
        ..reference_profile(seed)
    }
}

/// Deterministic priorities, one per task.
pub fn priorities(profile: &WorkloadProfile) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(profile.seed);
    (0..profile.task_count)
        .map(|_| (rng.next_u64() % profile.priority_range) as i64)
        .collect()
}

/// Deterministic tasks; task `i` has id `i`.
pub fn tasks(profile: &WorkloadProfile) -> Vec<Task> {
    priorities(profile)
        .into_iter()
        .enumerate()
        .map(|(id, priority)| Task::new(id as u64, "bench", priority))
        .collect()
}

/// Deterministic priority updates, each naming an existing task.
///
/// Uses a generator stream independent of [`priorities`].
pub fn updates(profile: &WorkloadProfile) -> Vec<(usize, i64)> {
    let mut rng = ChaCha8Rng::seed_from_u64(profile.seed ^ 0x9E37_79B9_7F4A_7C15);
    let task_count = profile.task_count.max(1) as u64;
    (0..profile.update_count)
        .map(|_| {
            let index = (rng.next_u64() % task_count) as usize;
            let priority = (rng.next_u64() % profile.priority_range) as i64;
            (index, priority)
        })
        .collect()
}
