//! Round-robin: time-sliced preemptive scheduling over one FIFO queue.
//!
//! This engine is the execution primitive of the multilevel policies: the
//! multilevel queue reruns it per queue on copies with floored arrivals,
//! and the feedback queue applies the same slice accounting per level.
//! Admission order on equal readiness is contractual: a process arriving
//! during a slice is queued ahead of the preempted process being requeued.

use std::collections::VecDeque;

use log::debug;

use super::timeline::{arena, RunState};
use crate::models::{Completion, Process};

/// Runs round-robin with the given quantum over a copy of `processes`.
///
/// Result order is completion order.
pub fn round_robin(processes: &[Process], quantum: i64) -> Vec<Completion> {
    let mut states = arena(processes);
    // Stable: equal arrivals keep input order.
    states.sort_by_key(|s| s.arrival);
    run_sorted(&mut states, quantum)
}

/// The slicing engine over arrival-sorted run states.
fn run_sorted(states: &mut [RunState], quantum: i64) -> Vec<Completion> {
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut completions = Vec::with_capacity(states.len());
    let mut admitted = 0;
    let mut clock = states.first().map(|s| s.arrival).unwrap_or(0);

    while completions.len() < states.len() {
        // Admit everything that has arrived by now, in arrival order.
        while admitted < states.len() && states[admitted].arrival <= clock {
            ready.push_back(admitted);
            admitted += 1;
        }

        let Some(i) = ready.pop_front() else {
            if admitted < states.len() {
                // Idle: jump to the next arrival.
                clock = states[admitted].arrival;
                continue;
            }
            break;
        };

        states[i].dispatch(clock);
        clock = states[i].execute(clock, quantum);

        // Arrivals during the slice enter ahead of the preempted process.
        while admitted < states.len() && states[admitted].arrival <= clock {
            ready.push_back(admitted);
            admitted += 1;
        }

        if states[i].is_done() {
            debug!("rr: {} finished at t={}", states[i].id, clock);
            completions.push(states[i].complete(clock));
        } else {
            ready.push_back(i);
        }
    }

    completions
}
