//! Command-line front end: load or generate a workload, run all six
//! policies, print the tables, and persist the comparison report.

use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use schedsim::input;
use schedsim::models::Process;
use schedsim::policies;
use schedsim::report::{self, ExtraColumn, PolicyRun};
use schedsim::validation::validate_processes;
use schedsim::workload::WorkloadGenerator;

/// Simulate classic CPU scheduling policies over a process list.
#[derive(Parser, Debug)]
#[command(name = "schedsim", version, about)]
struct Args {
    /// Input file: one `id arrival burst [priority]` per line.
    #[arg(long, default_value = "processes.txt")]
    input: PathBuf,

    /// Round-robin time quantum; prompted for interactively when omitted.
    #[arg(long)]
    quantum: Option<i64>,

    /// Path of the persisted report.
    #[arg(long, default_value = "report.txt")]
    output: PathBuf,

    /// Generate a random workload of this many processes instead of
    /// reading the input file.
    #[arg(long, value_name = "COUNT")]
    generate: Option<usize>,

    /// RNG seed for --generate.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let processes = load_workload(&args)?;
    if processes.is_empty() {
        bail!("workload is empty");
    }
    if let Err(errors) = validate_processes(&processes) {
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        bail!("invalid workload: {}", messages.join("; "));
    }

    let quantum = match args.quantum {
        Some(q) => q,
        None => prompt_quantum()?,
    };
    if quantum <= 0 {
        bail!("quantum must be positive, got {quantum}");
    }

    info!(
        "simulating {} processes, round-robin quantum {}",
        processes.len(),
        quantum
    );

    let runs = vec![
        PolicyRun::new(
            "FCFS (First-Come, First-Served)",
            ExtraColumn::None,
            policies::fcfs(&processes),
        ),
        PolicyRun::new(
            "SJF (Shortest Job First)",
            ExtraColumn::None,
            policies::shortest_job_first(&processes),
        ),
        PolicyRun::new(
            "Priority Scheduling",
            ExtraColumn::Priority,
            policies::priority_scheduling(&processes),
        ),
        PolicyRun::new(
            format!("Round Robin (Quantum={quantum})"),
            ExtraColumn::None,
            policies::round_robin(&processes, quantum),
        ),
        PolicyRun::new(
            "MLQ (Multilevel Queue)",
            ExtraColumn::QueueLevel,
            policies::multilevel_queue(&processes),
        ),
        PolicyRun::new(
            "MLFQ (Multilevel Feedback Queue)",
            ExtraColumn::QueueLevel,
            policies::multilevel_feedback_queue(&processes),
        ),
    ];

    for run in &runs {
        print!("{}", report::render_table(run));
    }
    print!("{}", report::render_comparison(&runs));

    report::write_report(&args.output, &runs)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("\nReport written to {}", args.output.display());

    Ok(())
}

fn load_workload(args: &Args) -> Result<Vec<Process>> {
    if let Some(count) = args.generate {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let processes = WorkloadGenerator::new(count).generate(&mut rng);
        println!("Generated {} processes (seed {})", processes.len(), args.seed);
        return Ok(processes);
    }
    let processes = input::load_path(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!(
        "Loaded {} processes from {}",
        processes.len(),
        args.input.display()
    );
    Ok(processes)
}

fn prompt_quantum() -> Result<i64> {
    print!("Round-robin time quantum (e.g. 2): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read quantum")?;
    line.trim()
        .parse()
        .with_context(|| format!("quantum must be an integer, got '{}'", line.trim()))
}
