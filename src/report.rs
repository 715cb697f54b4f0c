//! Result rendering and report persistence.
//!
//! Console tables are fixed-width and re-sorted by process id for
//! reading; the persisted report keeps each policy's own result order and
//! uses tab-separated rows, followed by a static commentary block on the
//! policies' trade-offs.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use crate::metrics::RunMetrics;
use crate::models::Completion;

/// Which optional column a policy's table carries.
///
/// FCFS, SJF, and round-robin print the basic columns; priority
/// scheduling adds the priority column; the multilevel policies add the
/// queue level instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraColumn {
    None,
    Priority,
    QueueLevel,
}

/// One policy's results, bundled for rendering.
#[derive(Debug, Clone)]
pub struct PolicyRun {
    /// Display name, e.g. "FCFS (First-Come, First-Served)".
    pub name: String,
    /// Optional column for this policy's tables.
    pub extra: ExtraColumn,
    /// Completions in the policy's own result order.
    pub completions: Vec<Completion>,
}

impl PolicyRun {
    /// Bundles a completed run for rendering.
    pub fn new(name: impl Into<String>, extra: ExtraColumn, completions: Vec<Completion>) -> Self {
        Self {
            name: name.into(),
            extra,
            completions,
        }
    }

    /// Aggregate metrics of this run.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics::calculate(&self.completions)
    }
}

/// Renders one policy's console table, sorted by process id.
pub fn render_table(run: &PolicyRun) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n========================================");
    let _ = writeln!(out, "  {}", run.name);
    let _ = writeln!(out, "========================================");

    let _ = write!(out, "{:<8}{:<10}{:<10}", "PID", "Arrival", "Burst");
    match run.extra {
        ExtraColumn::None => {}
        ExtraColumn::Priority => {
            let _ = write!(out, "{:<10}", "Priority");
        }
        ExtraColumn::QueueLevel => {
            let _ = write!(out, "{:<10}", "Queue");
        }
    }
    let _ = writeln!(
        out,
        "{:<10}{:<10}{:<10}{:<12}",
        "Start", "Finish", "Waiting", "Turnaround"
    );

    let width = if run.extra == ExtraColumn::None { 70 } else { 80 };
    let _ = writeln!(out, "{}", "-".repeat(width));

    for c in Completion::sorted_by_id(&run.completions) {
        let _ = write!(out, "{:<8}{:<10}{:<10}", c.id, c.arrival, c.burst);
        match run.extra {
            ExtraColumn::None => {}
            ExtraColumn::Priority => {
                let _ = write!(out, "{:<10}", c.priority);
            }
            ExtraColumn::QueueLevel => {
                let _ = write!(out, "{:<10}", c.queue_level);
            }
        }
        let _ = writeln!(
            out,
            "{:<10}{:<10}{:<10}{:<12}",
            c.start, c.finish, c.waiting, c.turnaround
        );
    }

    let metrics = run.metrics();
    let _ = writeln!(out, "\nAverage Waiting Time: {:.2}", metrics.avg_waiting);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", metrics.avg_turnaround);
    out
}

/// Renders the cross-policy comparison table.
pub fn render_comparison(runs: &[PolicyRun]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\n========================================");
    let _ = writeln!(out, "  POLICY COMPARISON");
    let _ = writeln!(out, "========================================");
    let _ = writeln!(
        out,
        "{:<35}{:<20}{:<20}",
        "Policy", "Avg Waiting", "Avg Turnaround"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));
    for run in runs {
        let metrics = run.metrics();
        let _ = writeln!(
            out,
            "{:<35}{:<20.2}{:<20.2}",
            run.name, metrics.avg_waiting, metrics.avg_turnaround
        );
    }
    out
}

/// Renders the persisted report: tab-separated tables per policy plus the
/// commentary block.
pub fn render_report(runs: &[PolicyRun]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== CPU SCHEDULING SIMULATION RESULTS ===");

    for run in runs {
        let _ = writeln!(out, "\n--- {} ---", run.name);
        let _ = write!(out, "PID\tArrival\tBurst");
        match run.extra {
            ExtraColumn::None => {}
            ExtraColumn::Priority => {
                let _ = write!(out, "\tPriority");
            }
            ExtraColumn::QueueLevel => {
                let _ = write!(out, "\tQueue");
            }
        }
        let _ = writeln!(out, "\tStart\tFinish\tWaiting\tTurnaround");

        for c in &run.completions {
            let _ = write!(out, "{}\t{}\t{}", c.id, c.arrival, c.burst);
            match run.extra {
                ExtraColumn::None => {}
                ExtraColumn::Priority => {
                    let _ = write!(out, "\t{}", c.priority);
                }
                ExtraColumn::QueueLevel => {
                    let _ = write!(out, "\t{}", c.queue_level);
                }
            }
            let _ = writeln!(out, "\t{}\t{}\t{}\t{}", c.start, c.finish, c.waiting, c.turnaround);
        }

        let metrics = run.metrics();
        let _ = writeln!(out, "Average Waiting Time: {:.2}", metrics.avg_waiting);
        let _ = writeln!(out, "Average Turnaround Time: {:.2}", metrics.avg_turnaround);
    }

    out.push_str(COMMENTARY);
    out
}

/// Writes the persisted report to `path`.
pub fn write_report(path: impl AsRef<Path>, runs: &[PolicyRun]) -> io::Result<()> {
    fs::write(path, render_report(runs))
}

/// Static qualitative comparison of the six policies. Not derived from
/// simulation output.
const COMMENTARY: &str = "

=== ANALYSIS ===

FCFS:
  Strengths: simple, inherently fair, no starvation
  Weaknesses: convoy effect behind long bursts

SJF:
  Strengths: minimal average waiting time
  Weaknesses: long jobs can starve; needs burst estimates

Priority:
  Strengths: expresses externally assigned urgency
  Weaknesses: low-priority processes can starve

Round Robin:
  Strengths: fair, responsive for interactive loads
  Weaknesses: context-switch overhead grows as the quantum shrinks

MLQ (Multilevel Queue):
  Strengths: clear separation of workload classes
  Weaknesses: rigid; a process can never change queue
  Structure: Q0 FCFS, Q1 RR q=2, Q2 RR q=4

MLFQ (Multilevel Feedback Queue):
  Strengths: adapts to observed behavior, favors short and I/O-bound work
  Weaknesses: more complex, more bookkeeping overhead
  Structure: Q0 RR q=2, Q1 RR q=4, Q2 FCFS
";
