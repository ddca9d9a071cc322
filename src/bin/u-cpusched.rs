//! u-cpusched CLI
//!
//! Compare CPU-scheduling policies on a process set.
//!
//! # Example
//!
//! ```bash
//! # Metrics for every policy, RR quantum 4
//! u-cpusched run --input processes.json --quantum 4
//!
//! # Just SJF, as JSON with the execution trace
//! u-cpusched run --input processes.json --policy sjf --json --trace
//!
//! # A reproducible random workload
//! u-cpusched generate --count 8 --seed 42 > processes.json
//! ```
//!
//! Input files are JSON arrays of `{"pid", "arrival_time", "burst_time"}`.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_cpusched::config::{
    DEFAULT_MAX_ARRIVAL, DEFAULT_MAX_BURST, DEFAULT_MIN_BURST, DEFAULT_PROCESS_COUNT,
    DEFAULT_QUANTUM,
};
use u_cpusched::scheduler::{compare_policies, Policy, SimulationReport};
use u_cpusched::workload::{generate, WorkloadConfig};
use u_cpusched::ProcessRecord;

/// CPU scheduling simulator
///
/// Replays FCFS, SJF and Round Robin over a fixed process set and reports
/// average turnaround, waiting and response times.
#[derive(Parser, Debug)]
#[command(name = "u-cpusched")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate policies over a process file
    Run {
        /// JSON file with the process set
        #[arg(short, long)]
        input: PathBuf,

        /// Round Robin time quantum
        #[arg(short, long, default_value_t = DEFAULT_QUANTUM)]
        quantum: i64,

        /// Policy to simulate
        #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
        policy: PolicyArg,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,

        /// Include the execution trace
        #[arg(long)]
        trace: bool,
    },

    /// Print a random process set as JSON
    Generate {
        /// Number of processes
        #[arg(short, long, default_value_t = DEFAULT_PROCESS_COUNT)]
        count: u32,

        /// Random seed. When omitted, a random seed is used.
        #[arg(long)]
        seed: Option<u64>,

        /// Latest arrival tick
        #[arg(long, default_value_t = DEFAULT_MAX_ARRIVAL)]
        max_arrival: i64,

        /// Shortest burst
        #[arg(long, default_value_t = DEFAULT_MIN_BURST)]
        min_burst: i64,

        /// Longest burst
        #[arg(long, default_value_t = DEFAULT_MAX_BURST)]
        max_burst: i64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Fcfs,
    Sjf,
    Rr,
    All,
}

impl PolicyArg {
    fn policies(self, quantum: i64) -> Vec<Policy> {
        let rr = Policy::RoundRobin { quantum };
        match self {
            Self::Fcfs => vec![Policy::Fcfs],
            Self::Sjf => vec![Policy::Sjf],
            Self::Rr => vec![rr],
            Self::All => vec![Policy::Fcfs, Policy::Sjf, rr],
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,u_cpusched=info")),
        )
        .init();

    match Args::parse().command {
        Command::Run {
            input,
            quantum,
            policy,
            json,
            trace,
        } => {
            let raw = fs::read_to_string(&input)?;
            let processes: Vec<ProcessRecord> = serde_json::from_str(&raw)?;
            info!(path = %input.display(), n = processes.len(), "loaded process set");

            let reports = compare_policies(&policy.policies(quantum), &processes, trace)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print_table(&reports);
            }
        }
        Command::Generate {
            count,
            seed,
            max_arrival,
            min_burst,
            max_burst,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!(count, seed, "generating workload");
            let processes = generate(&WorkloadConfig {
                count,
                max_arrival,
                min_burst,
                max_burst,
                seed,
            });
            println!("{}", serde_json::to_string_pretty(&processes)?);
        }
    }

    Ok(())
}

fn print_table(reports: &[SimulationReport]) {
    println!(
        "{:<10} {:>12} {:>12} {:>12} {:>9} {:>7}",
        "policy", "turnaround", "waiting", "response", "makespan", "util"
    );
    for report in reports {
        let m = &report.metrics;
        println!(
            "{:<10} {:>12.2} {:>12.2} {:>12.2} {:>9} {:>6.1}%",
            report.policy.to_string(),
            m.avg_turnaround,
            m.avg_waiting,
            m.avg_response,
            report.makespan(),
            report.cpu_utilization() * 100.0
        );
        if !report.trace.is_empty() {
            let gantt: Vec<String> = report
                .trace
                .iter()
                .map(|s| format!("P{}[{}-{})", s.pid, s.start, s.end))
                .collect();
            println!("  {}", gantt.join(" "));
        }
    }
}
