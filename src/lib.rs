//! CPU scheduling policy simulator.
//!
//! Replays a fixed set of processes under six classic dispatch policies —
//! FCFS, SJF, Priority, Round-Robin, MLQ, and MLFQ — on a discrete integer
//! clock, producing per-process timing records (start, finish, waiting,
//! turnaround) and aggregate averages for side-by-side comparison.
//!
//! Time is advanced by the simulation itself, never by the wall clock:
//! each policy run is a pure function from an input process set to an
//! ordered sequence of completions.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process` (input), `Completion` (result)
//! - **`policies`**: The six scheduling policies and their shared timeline engine
//! - **`metrics`**: Aggregate run metrics (average waiting/turnaround, makespan)
//! - **`input`**: Plain-text workload loader
//! - **`validation`**: Workload integrity checks (duplicate IDs, invalid times)
//! - **`workload`**: Seeded random workload generation
//! - **`report`**: Console tables and the persisted comparison report
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau & Arpaci-Dusseau (2018), "Operating Systems: Three
//!   Easy Pieces", Ch. 7–8: Scheduling

pub mod input;
pub mod metrics;
pub mod models;
pub mod policies;
pub mod report;
pub mod validation;
pub mod workload;
