//! Run quality metrics.
//!
//! Reduces any sequence of completions to the aggregate indicators used
//! for cross-policy comparison.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean time spent ready but not running |
//! | Avg Turnaround | Mean time from arrival to completion |
//! | Makespan | Latest completion time |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//! Ch. 5.2: Scheduling Criteria

use crate::models::Completion;

/// Aggregate indicators of one policy run.
///
/// All averages are arithmetic means; an empty run yields zeros rather
/// than an error.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    /// Mean waiting time (ticks).
    pub avg_waiting: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround: f64,
    /// Latest completion time (ticks); 0 for an empty run.
    pub makespan: i64,
}

impl RunMetrics {
    /// Computes metrics from a completed run.
    pub fn calculate(completions: &[Completion]) -> Self {
        if completions.is_empty() {
            return Self::default();
        }

        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut makespan: i64 = 0;

        for c in completions {
            total_waiting += c.waiting;
            total_turnaround += c.turnaround;
            makespan = makespan.max(c.finish);
        }

        let count = completions.len() as f64;
        Self {
            avg_waiting: total_waiting as f64 / count,
            avg_turnaround: total_turnaround as f64 / count,
            makespan,
        }
    }
}
