//! Non-preemptive run-to-completion policies (SJF, Priority).
//!
//! Both share one control loop: among the processes that have arrived and
//! not yet finished, pick the one the rule scores lowest and run it to
//! completion. When nothing has arrived yet, the clock jumps straight to
//! the next arrival instead of stepping.
//!
//! # Score Convention
//! **Lower score = scheduled first.** Ties keep input order: the scan
//! replaces the candidate only on a strictly smaller score.

use crate::models::{Completion, Process};

/// Picks the next process to run among the ready candidates.
pub trait SelectionRule {
    /// Rule name (e.g. "SJF").
    fn name(&self) -> &'static str;

    /// Score of a ready process; lower wins, ties keep input order.
    fn evaluate(&self, process: &Process) -> i64;
}

/// Shortest job first: picks the smallest total burst.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl SelectionRule for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> i64 {
        process.burst
    }
}

/// Priority scheduling: picks the smallest priority value.
#[derive(Debug, Clone, Copy)]
pub struct MostUrgent;

impl SelectionRule for MostUrgent {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> i64 {
        i64::from(process.priority)
    }
}

/// Runs non-preemptive shortest-job-first.
pub fn shortest_job_first(processes: &[Process]) -> Vec<Completion> {
    run_with_rule(processes, &ShortestJob)
}

/// Runs non-preemptive priority scheduling (lower value = more urgent).
pub fn priority_scheduling(processes: &[Process]) -> Vec<Completion> {
    run_with_rule(processes, &MostUrgent)
}

/// The shared selection loop. Result order is completion order.
pub fn run_with_rule(processes: &[Process], rule: &dyn SelectionRule) -> Vec<Completion> {
    let mut completed = vec![false; processes.len()];
    let mut completions = Vec::with_capacity(processes.len());
    let mut clock = 0;

    while completions.len() < processes.len() {
        let mut picked = None;
        let mut best = i64::MAX;
        for (i, p) in processes.iter().enumerate() {
            if completed[i] || p.arrival > clock {
                continue;
            }
            let score = rule.evaluate(p);
            if score < best {
                best = score;
                picked = Some(i);
            }
        }

        match picked {
            Some(i) => {
                let completion = Completion::uninterrupted(&processes[i], clock);
                clock = completion.finish;
                completed[i] = true;
                completions.push(completion);
            }
            None => {
                // Idle: jump to the earliest arrival still outstanding.
                let next = processes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !completed[*i])
                    .map(|(_, p)| p.arrival)
                    .min();
                match next {
                    Some(arrival) => clock = arrival,
                    None => break,
                }
            }
        }
    }

    completions
}
