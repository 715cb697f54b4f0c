//! Multilevel queue: three statically-classified queues, drained in
//! strict order.
//!
//! Classification is fixed by static priority: foreground work
//! (`priority <= 1`) runs FCFS in queue 0, interactive work
//! (`priority == 2`) runs round-robin with quantum 2 in queue 1, and
//! everything else runs round-robin with quantum 4 in queue 2.
//!
//! The policy is non-preemptive *between* queues: a queue only begins
//! once the previous one has fully drained. This is expressed by flooring
//! each later queue's working arrivals at the drain time of its
//! predecessor, so waiting-time accounting restarts from the adjusted
//! clock rather than the original arrival.

use log::debug;

use super::fcfs::fcfs;
use super::round_robin::round_robin;
use crate::models::{Completion, Process};

/// Quantum of the interactive queue (level 1).
const INTERACTIVE_QUANTUM: i64 = 2;
/// Quantum of the background queue (level 2).
const BACKGROUND_QUANTUM: i64 = 4;

/// Runs the multilevel queue policy over a copy of `processes`.
///
/// Results are tagged with their queue level and concatenated queue by
/// queue; there is no cross-queue ordering guarantee beyond that.
pub fn multilevel_queue(processes: &[Process]) -> Vec<Completion> {
    let mut queues: [Vec<Process>; 3] = Default::default();
    for p in processes {
        let level = classify(p);
        queues[level].push(p.clone());
    }
    debug!(
        "mlq: classified {}/{}/{} processes into queues 0/1/2",
        queues[0].len(),
        queues[1].len(),
        queues[2].len()
    );

    let mut completions = Vec::with_capacity(processes.len());
    let mut clock = 0;

    // Queue 0 runs first, on native arrivals.
    for c in fcfs(&queues[0]) {
        clock = clock.max(c.finish);
        completions.push(c);
    }

    // Queue 1 cannot start before queue 0 drains.
    if !queues[1].is_empty() {
        let floor = match completions.last() {
            Some(last) => last.finish,
            None => min_arrival(&queues[1]),
        };
        for p in &mut queues[1] {
            p.arrival = p.arrival.max(floor);
        }
        for mut c in round_robin(&queues[1], INTERACTIVE_QUANTUM) {
            c.queue_level = 1;
            clock = clock.max(c.finish);
            completions.push(c);
        }
    }

    // Queue 2 runs last, floored at everything scheduled so far.
    if !queues[2].is_empty() {
        let floor = clock;
        for p in &mut queues[2] {
            p.arrival = p.arrival.max(floor);
        }
        for mut c in round_robin(&queues[2], BACKGROUND_QUANTUM) {
            c.queue_level = 2;
            clock = clock.max(c.finish);
            completions.push(c);
        }
    }

    completions
}

fn classify(process: &Process) -> usize {
    match process.priority {
        p if p <= 1 => 0,
        2 => 1,
        _ => 2,
    }
}

fn min_arrival(processes: &[Process]) -> i64 {
    processes.iter().map(|p| p.arrival).min().unwrap_or(0)
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
    fn test_mlq_reference_workload() {
        let workload = vec![
            Process::new("P1", 0, 5).with_priority(1),
            Process::new("P2", 1, 3).with_priority(2),
            Process::new("P3", 2, 8).with_priority(3),
        ];
        let completions = multilevel_queue(&workload);
        assert_eq!(completions.len(), 3);

        let p1 = by_id(&completions, "P1");
        assert_eq!(p1.queue_level, 0);
        assert_eq!((p1.start, p1.finish, p1.waiting), (0, 5, 0));

        // P2's working arrival is floored at queue 0's drain time.
        let p2 = by_id(&completions, "P2");
        assert_eq!(p2.queue_level, 1);
        assert_eq!(p2.arrival, 5);
        assert_eq!((p2.start, p2.finish, p2.waiting, p2.turnaround), (5, 8, 0, 3));

        let p3 = by_id(&completions, "P3");
        assert_eq!(p3.queue_level, 2);
        assert_eq!(p3.arrival, 8);
        assert_eq!((p3.start, p3.finish, p3.waiting, p3.turnaround), (8, 16, 0, 8));
    }

    #[test]
    fn test_mlq_queue_start_floors() {
        let workload = vec![
            Process::new("A", 0, 4).with_priority(0),
            Process::new("B", 0, 4).with_priority(2),
            Process::new("C", 0, 4).with_priority(5),
        ];
        let completions = multilevel_queue(&workload);
        let a = by_id(&completions, "A");
        let b = by_id(&completions, "B");
        let c = by_id(&completions, "C");
        assert!(b.start >= a.finish);
        assert!(c.start >= b.finish);
    }

    #[test]
    fn test_mlq_empty_front_queue_uses_native_arrivals() {
        // Only interactive work: the floor falls back to its own earliest
        // arrival, so nothing is artificially delayed.
        let workload = vec![Process::new("P1", 3, 2).with_priority(2)];
        let completions = multilevel_queue(&workload);
        let p1 = &completions[0];
        assert_eq!(p1.queue_level, 1);
        assert_eq!(p1.arrival, 3);
        assert_eq!((p1.start, p1.finish, p1.waiting), (3, 5, 0));
    }

    #[test]
    fn test_mlq_classification() {
        let workload = vec![
            Process::new("neg", 0, 1).with_priority(-3),
            Process::new("one", 0, 1).with_priority(1),
            Process::new("two", 0, 1).with_priority(2),
            Process::new("ten", 0, 1).with_priority(10),
        ];
        let completions = multilevel_queue(&workload);
        assert_eq!(by_id(&completions, "neg").queue_level, 0);
        assert_eq!(by_id(&completions, "one").queue_level, 0);
        assert_eq!(by_id(&completions, "two").queue_level, 1);
        assert_eq!(by_id(&completions, "ten").queue_level, 2);
    }

    #[test]
    fn test_mlq_invariants() {
        let workload = vec![
            Process::new("P1", 0, 5).with_priority(1),
            Process::new("P2", 1, 3).with_priority(2),
            Process::new("P3", 2, 8).with_priority(3),
            Process::new("P4", 4, 2).with_priority(2),
        ];
        let completions = multilevel_queue(&workload);
        assert_eq!(completions.len(), 4);
        for c in &completions {
            // Invariants hold against the adjusted arrival.
            assert_eq!(c.turnaround, c.waiting + c.burst);
            assert_eq!(c.turnaround, c.finish - c.arrival);
        }
    }
}
