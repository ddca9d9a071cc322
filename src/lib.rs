//! Deterministic CPU-scheduling simulator.
//!
//! Replays a fixed batch of processes under First-Come-First-Served,
//! non-preemptive Shortest-Job-First and Round Robin, and reports average
//! turnaround, waiting and response times. Nothing is executed; this is an
//! analytical tool for comparing policies on a dataset.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessRecord`, `ProcessOutcome`,
//!   `Metrics`, `ExecutionSlice`
//! - **`dispatching`**: Arrival ordering and the FIFO / SPT rules
//! - **`simulation`**: The shared `Timeline` clock
//! - **`scheduler`**: FCFS, SJF and Round Robin engines, KPI aggregation
//! - **`validation`**: Input integrity checks (duplicate pids, bad times)
//! - **`workload`**: Seeded synthetic process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::{fcfs_metrics, rr_metrics, sjf_metrics, ProcessRecord};
//!
//! let processes = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 0, 3)];
//! assert_eq!(fcfs_metrics(&processes).unwrap().avg_waiting, 2.5);
//! assert_eq!(sjf_metrics(&processes).unwrap().avg_waiting, 1.5);
//! assert_eq!(rr_metrics(&processes, 2).unwrap().avg_waiting, 3.5);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{Metrics, ProcessRecord};
pub use scheduler::{fcfs_metrics, rr_metrics, sjf_metrics, Policy, SimulationReport};
