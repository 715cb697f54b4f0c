//! Shared per-run simulation state for the preemptive engines.
//!
//! Each policy run builds its own arena of [`RunState`] entries addressed
//! by index, so no state ever aliases across runs.

use crate::models::{Completion, Process};

/// Mutable per-run state of one process.
#[derive(Debug, Clone)]
pub(crate) struct RunState {
    pub id: String,
    /// Working arrival (already floored by the multilevel queue where
    /// that policy applies).
    pub arrival: i64,
    pub burst: i64,
    pub priority: i32,
    /// CPU time still owed; 0 exactly at completion.
    pub remaining: i64,
    /// First dispatch time; `None` until first scheduled.
    pub start: Option<i64>,
    /// Ready-but-not-running time accumulated so far.
    pub waiting: i64,
    /// Queue that last held the process (multilevel policies).
    pub queue_level: usize,
    /// Last instant the process left the CPU, or its arrival if never run.
    pub last_ran: i64,
}

impl RunState {
    fn from_process(process: &Process) -> Self {
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            remaining: process.burst,
            start: None,
            waiting: 0,
            queue_level: 0,
            last_ran: process.arrival,
        }
    }

    /// Accounts the ready time since the process last left the CPU and
    /// marks the first dispatch.
    pub fn dispatch(&mut self, clock: i64) {
        self.waiting += clock - self.last_ran;
        if self.start.is_none() {
            self.start = Some(clock);
        }
    }

    /// Executes for `min(quantum, remaining)` ticks; returns the new clock.
    pub fn execute(&mut self, clock: i64, quantum: i64) -> i64 {
        let slice = quantum.min(self.remaining);
        self.remaining -= slice;
        self.last_ran = clock + slice;
        clock + slice
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Seals the record at completion time `finish`. Waiting already holds
    /// its final value from the dispatch accounting.
    pub fn complete(&self, finish: i64) -> Completion {
        Completion {
            id: self.id.clone(),
            arrival: self.arrival,
            burst: self.burst,
            priority: self.priority,
            start: self.start.unwrap_or(self.arrival),
            finish,
            waiting: self.waiting,
            turnaround: finish - self.arrival,
            queue_level: self.queue_level,
        }
    }
}

/// Builds a fresh arena, one entry per process, in input order.
pub(crate) fn arena(processes: &[Process]) -> Vec<RunState> {
    processes.iter().map(RunState::from_process).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_and_execute() {
        let mut s = arena(&[Process::new("P1", 2, 5)]).remove(0);
        s.dispatch(4);
        assert_eq!(s.waiting, 2);
        assert_eq!(s.start, Some(4));

        let clock = s.execute(4, 2);
        assert_eq!(clock, 6);
        assert_eq!(s.remaining, 3);
        assert_eq!(s.last_ran, 6);
        assert!(!s.is_done());

        // Second dispatch right away accrues no extra waiting.
        s.dispatch(6);
        assert_eq!(s.waiting, 2);
        let clock = s.execute(6, 10);
        assert_eq!(clock, 9);
        assert!(s.is_done());

        let c = s.complete(clock);
        assert_eq!(c.start, 4);
        assert_eq!(c.finish, 9);
        assert_eq!(c.turnaround, 7);
        assert_eq!(c.turnaround, c.waiting + c.burst);
    }

    #[test]
    fn test_slice_capped_by_remaining() {
        let mut s = arena(&[Process::new("P1", 0, 3)]).remove(0);
        s.dispatch(0);
        let clock = s.execute(0, i64::MAX);
        assert_eq!(clock, 3);
        assert!(s.is_done());
    }
}
