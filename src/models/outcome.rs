//! Completion (result) model.
//!
//! A completion is the timing record a policy produces for one process.
//! Records are immutable once produced; every policy returns its own
//! ordered sequence of them.

use serde::{Deserialize, Serialize};

use super::Process;

/// Timing record of one completed process.
///
/// Holds the invariant `finish - arrival == turnaround == waiting + burst`
/// for every policy in this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Process identifier.
    pub id: String,
    /// Working arrival the policy scheduled against. The multilevel queue
    /// floors this at the drain time of the preceding queue.
    pub arrival: i64,
    /// Total CPU time consumed.
    pub burst: i64,
    /// Static priority of the input process.
    pub priority: i32,
    /// Time of first dispatch.
    pub start: i64,
    /// Time of completion.
    pub finish: i64,
    /// Total time spent ready but not running.
    pub waiting: i64,
    /// `finish - arrival`.
    pub turnaround: i64,
    /// Queue that last executed the process (multilevel policies only;
    /// 0 everywhere else).
    pub queue_level: usize,
}

impl Completion {
    /// Record for a process dispatched once at `start` and run to
    /// completion without preemption.
    pub fn uninterrupted(process: &Process, start: i64) -> Self {
        let finish = start + process.burst;
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start,
            finish,
            waiting: start - process.arrival,
            turnaround: finish - process.arrival,
            queue_level: 0,
        }
    }

    /// Copy of `completions` re-sorted by process id, for display.
    pub fn sorted_by_id(completions: &[Completion]) -> Vec<Completion> {
        let mut sorted = completions.to_vec();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        sorted
    }
}
