//! Reusable queue element fixtures.
//!
//! [`Task`] models the usual reprioritization setup: an element with a
//! stable identity and a mutable priority. Its equality compares only
//! the identity, so a copy with an updated priority still finds its
//! queued original.

use std::fmt;

/// Queue element identified by `id` and ranked by `priority`.
#[derive(Clone, Debug)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub priority: i64,
}

impl Task {
    pub fn new(id: u64, name: impl Into<String>, priority: i64) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
        }
    }

    /// Same task with a different priority.
    pub fn with_priority(&self, priority: i64) -> Self {
        Self {
            priority,
            ..self.clone()
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@{}", self.name, self.id, self.priority)
    }
}

/// Lower priority value first.
pub fn by_priority(a: &Task, b: &Task) -> bool {
    a.priority <= b.priority
}
