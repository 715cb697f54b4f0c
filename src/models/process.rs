//! Process (workload) model.
//!
//! A process is one unit of simulated work: it becomes ready at its
//! arrival time and needs `burst` ticks of CPU to complete.

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Carries only the static inputs of a simulation. Per-run mutable state
/// (remaining burst, accumulated waiting) lives inside the policy engines;
/// a `Process` is never mutated by a run, so the same set can be replayed
/// under every policy.
///
/// # Time Representation
/// All times are dimensionless integer ticks on a discrete clock starting
/// at t=0. Lower `priority` values mean more urgent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Time the process becomes ready (ticks, non-negative).
    pub arrival: i64,
    /// Total CPU time required (ticks, positive).
    pub burst: i64,
    /// Static priority; lower = more urgent. Defaults to 0.
    pub priority: i32,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the static priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority, 0);
    }
}
