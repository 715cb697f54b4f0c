//! The six scheduling policies.
//!
//! Every policy takes the same input — a slice of [`Process`] records —
//! works on its own copy, and returns an ordered `Vec<Completion>` with
//! all timing fields filled in. Runs share nothing, so policies can be
//! compared on one workload without interference.
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`fcfs`] | no | arrival order |
//! | [`shortest_job_first`] | no | minimum burst among arrived |
//! | [`priority_scheduling`] | no | minimum priority value among arrived |
//! | [`round_robin`] | yes | FIFO, fixed quantum |
//! | [`multilevel_queue`] | between queues: no | static 3-queue classification |
//! | [`multilevel_feedback_queue`] | yes | strict level priority, demotion |
//!
//! ```
//! use schedsim::models::Process;
//! use schedsim::policies;
//!
//! let workload = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let completions = policies::round_robin(&workload, 2);
//! assert_eq!(completions.len(), 2);
//! for c in &completions {
//!     assert_eq!(c.turnaround, c.waiting + c.burst);
//! }
//! ```

mod fcfs;
mod mlfq;
mod mlq;
mod nonpreemptive;
mod round_robin;
mod timeline;

pub use fcfs::fcfs;
pub use mlfq::multilevel_feedback_queue;
pub use mlq::multilevel_queue;
pub use nonpreemptive::{
    priority_scheduling, run_with_rule, shortest_job_first, MostUrgent, SelectionRule, ShortestJob,
};
pub use round_robin::round_robin;
