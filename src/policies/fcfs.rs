//! First-come, first-served.
//!
//! Processes run to completion in arrival order. A stable sort keeps the
//! input order on arrival ties, and flooring each start at the current
//! clock absorbs idle gaps.

use crate::models::{Completion, Process};

/// Runs first-come, first-served over a copy of `processes`.
///
/// Result order is arrival order. O(n log n).
pub fn fcfs(processes: &[Process]) -> Vec<Completion> {
    let mut ordered: Vec<&Process> = processes.iter().collect();
    ordered.sort_by_key(|p| p.arrival);

    let mut clock = 0;
    let mut completions = Vec::with_capacity(ordered.len());
    for p in ordered {
        let completion = Completion::uninterrupted(p, clock.max(p.arrival));
        clock = completion.finish;
        completions.push(completion);
    }
    completions
}
