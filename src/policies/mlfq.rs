//! Multilevel feedback queue: three levels with demotion on slice expiry.
//!
//! Every process enters at level 0 regardless of its static priority —
//! classification is purely by demotion history. Level quanta are 2, 4,
//! and unbounded, so level 2 behaves as FCFS once reached. Selection is
//! strictly by level: level 0 always runs before level 1, which always
//! runs before level 2.
//!
//! A process that exhausts its slice with work remaining is demoted one
//! level (level 2 is absorbing) and requeued at the tail of the new
//! level. A demoted process never re-enters through first admission.
//!
//! # Reference
//! Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//! Easy Pieces", Ch. 8: Multi-Level Feedback

use std::collections::VecDeque;

use log::debug;

use super::timeline::arena;
use crate::models::{Completion, Process};

/// Per-level quanta; the last level runs to completion.
const LEVEL_QUANTA: [i64; 3] = [2, 4, i64::MAX];

/// Runs the multilevel feedback queue policy over a copy of `processes`.
///
/// Result order is completion order; each record's `queue_level` is the
/// level the process last ran at.
pub fn multilevel_feedback_queue(processes: &[Process]) -> Vec<Completion> {
    let mut states = arena(processes);
    let mut queues: [VecDeque<usize>; 3] = Default::default();
    let mut admitted = vec![false; states.len()];
    let mut completions = Vec::with_capacity(states.len());
    let mut clock = states.iter().map(|s| s.arrival).min().unwrap_or(0);

    while completions.len() < states.len() {
        // First admission only: arrivals enter at the top level in input
        // order; demoted processes re-enter lower down via requeue.
        for (i, s) in states.iter().enumerate() {
            if !admitted[i] && s.remaining > 0 && s.arrival <= clock {
                queues[0].push_back(i);
                admitted[i] = true;
            }
        }

        let picked = queues
            .iter_mut()
            .enumerate()
            .find_map(|(level, queue)| queue.pop_front().map(|i| (level, i)));

        let Some((level, i)) = picked else {
            // All levels idle: jump to the earliest process still outside.
            let next = states
                .iter()
                .enumerate()
                .filter(|(i, s)| !admitted[*i] && s.remaining > 0)
                .map(|(_, s)| s.arrival)
                .min();
            match next {
                Some(arrival) => {
                    clock = arrival;
                    continue;
                }
                None => break,
            }
        };

        states[i].dispatch(clock);
        clock = states[i].execute(clock, LEVEL_QUANTA[level]);

        if states[i].is_done() {
            completions.push(states[i].complete(clock));
        } else {
            let next_level = (level + 1).min(LEVEL_QUANTA.len() - 1);
            debug!(
                "mlfq: {} demoted to level {} at t={}",
                states[i].id, next_level, clock
            );
            states[i].queue_level = next_level;
            queues[next_level].push_back(i);
        }
    }

    completions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_id(completions: &[Completion], id: &str) -> Completion {
        completions
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("missing {id}"))
    }

    #[test]
    fn test_mlfq_reference_workload() {
        let workload = vec![
            Process::new("P1", 0, 5).with_priority(1),
            Process::new("P2", 1, 3).with_priority(2),
            Process::new("P3", 2, 8).with_priority(3),
        ];
        let completions = multilevel_feedback_queue(&workload);
        let order: Vec<&str> = completions.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, vec!["P1", "P2", "P3"]);

        let p1 = by_id(&completions, "P1");
        assert_eq!((p1.start, p1.finish, p1.waiting), (0, 9, 4));
        assert_eq!(p1.queue_level, 1);

        let p2 = by_id(&completions, "P2");
        assert_eq!((p2.start, p2.finish, p2.waiting), (2, 10, 6));
        assert_eq!(p2.queue_level, 1);

        let p3 = by_id(&completions, "P3");
        assert_eq!((p3.start, p3.finish, p3.waiting), (4, 16, 6));
        assert_eq!(p3.queue_level, 2);

        for c in &completions {
            assert_eq!(c.turnaround, c.waiting + c.burst);
            assert_eq!(c.turnaround, c.finish - c.arrival);
        }
    }

    #[test]
    fn test_mlfq_short_burst_finishes_at_top_level() {
        // burst <= first quantum never demotes.
        let completions = multilevel_feedback_queue(&[Process::new("P1", 0, 2)]);
        assert_eq!(completions[0].queue_level, 0);
        assert_eq!(completions[0].finish, 2);
    }

    #[test]
    fn test_mlfq_bottom_level_is_absorbing() {
        // 2 + 4 ticks of demotion, then the rest runs unbounded at level 2.
        let completions = multilevel_feedback_queue(&[Process::new("P1", 0, 20)]);
        let p1 = &completions[0];
        assert_eq!(p1.queue_level, 2);
        assert_eq!((p1.start, p1.finish, p1.waiting), (0, 20, 0));
    }

    #[test]
    fn test_mlfq_top_level_preempts_lower_work() {
        // P2 arrives while P1 sits at level 2; P2's level-0 queue wins.
        let workload = vec![Process::new("P1", 0, 10), Process::new("P2", 3, 2)];
        let completions = multilevel_feedback_queue(&workload);

        let p2 = by_id(&completions, "P2");
        assert_eq!(p2.queue_level, 0);
        assert_eq!((p2.start, p2.finish, p2.waiting), (6, 8, 3));

        let p1 = by_id(&completions, "P1");
        assert_eq!(p1.queue_level, 2);
        assert_eq!((p1.start, p1.finish, p1.waiting), (0, 12, 2));
    }

    #[test]
    fn test_mlfq_static_priority_is_ignored() {
        // Same arrivals and bursts, wildly different priorities: identical timing.
        let plain = vec![Process::new("A", 0, 6), Process::new("B", 1, 6)];
        let prioritized = vec![
            Process::new("A", 0, 6).with_priority(9),
            Process::new("B", 1, 6).with_priority(-9),
        ];
        let lhs = multilevel_feedback_queue(&plain);
        let rhs = multilevel_feedback_queue(&prioritized);
        for (a, b) in lhs.iter().zip(rhs.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.start, b.start);
            assert_eq!(a.finish, b.finish);
            assert_eq!(a.waiting, b.waiting);
        }
    }

    #[test]
    fn test_mlfq_idle_gap() {
        let completions = multilevel_feedback_queue(&[Process::new("P1", 5, 3)]);
        let p1 = &completions[0];
        assert_eq!((p1.start, p1.finish, p1.waiting, p1.turnaround), (5, 8, 0, 3));
    }
}
