//! Simulation domain models.
//!
//! Provides the two records every policy speaks in: the immutable
//! [`Process`] input and the [`Completion`] timing result. Each policy
//! run copies its input and fills in a fresh result set — records are
//! never shared between runs.

mod outcome;
mod process;

pub use outcome::Completion;
pub use process::Process;
