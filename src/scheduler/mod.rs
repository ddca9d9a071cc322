//! Scheduling engines and metric aggregation.
//!
//! Three classical single-CPU disciplines, each a pure function of its
//! input:
//!
//! | Engine | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`fcfs`] | no | arrival order |
//! | [`sjf`] | no | shortest burst among arrived |
//! | [`round_robin`] | yes | FIFO ready queue, fixed quantum |
//!
//! Every engine validates its input, copies it into a private working
//! buffer, replays the policy on a [`Timeline`](crate::simulation::Timeline)
//! and reduces the finished processes into [`Metrics`].
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessRecord;
//! use u_cpusched::scheduler::{compare_policies, Policy};
//!
//! let processes = vec![ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 0, 2)];
//! let reports = compare_policies(&[Policy::Fcfs, Policy::Sjf], &processes, false).unwrap();
//! assert_eq!(reports[0].metrics.avg_turnaround, 5.0);
//! assert_eq!(reports[1].metrics.avg_turnaround, 4.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod kpi;
mod round_robin;
mod sjf;

pub use fcfs::{fcfs, fcfs_metrics};
pub use round_robin::{round_robin, rr_metrics};
pub use sjf::{sjf, sjf_metrics};

use fcfs::fcfs_on;
use round_robin::round_robin_on;
use sjf::sjf_on;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SimulationError;
use crate::models::{ExecutionSlice, Metrics, ProcessOutcome, ProcessRecord};
use crate::simulation::{working_copy, Timeline};
use crate::validation::validate_processes;

/// A scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    Sjf,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous ticks per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin { .. })
    }

    /// Runs this policy over `processes`, recording the execution trace.
    pub fn simulate(
        &self,
        processes: &[ProcessRecord],
    ) -> Result<SimulationReport, SimulationError> {
        self.simulate_on(processes, Timeline::traced())
    }

    /// Runs this policy over `processes` on the given timeline.
    ///
    /// Pass [`Timeline::new`] to skip trace recording.
    pub fn simulate_on(
        &self,
        processes: &[ProcessRecord],
        timeline: Timeline,
    ) -> Result<SimulationReport, SimulationError> {
        match *self {
            Self::Fcfs => fcfs_on(processes, timeline),
            Self::Sjf => sjf_on(processes, timeline),
            Self::RoundRobin { quantum } => round_robin_on(processes, quantum, timeline),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::Sjf => write!(f, "SJF"),
            Self::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
        }
    }
}

/// Full result of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced this report.
    pub policy: Policy,
    /// Finished processes, in completion order.
    pub outcomes: Vec<ProcessOutcome>,
    /// CPU slices in time order.
    pub trace: Vec<ExecutionSlice>,
    /// Aggregate averages over `outcomes`.
    pub metrics: Metrics,
}

impl SimulationReport {
    pub(crate) fn new(policy: Policy, outcomes: Vec<ProcessOutcome>, timeline: Timeline) -> Self {
        let metrics = Metrics::from_outcomes(&outcomes);
        Self {
            policy,
            outcomes,
            trace: timeline.into_slices(),
            metrics,
        }
    }
}

/// Runs every policy in `policies` over the same input.
///
/// Each engine gets its own working copy; reports come back in the order
/// of `policies`. Traces are recorded only when `record_trace` is set.
pub fn compare_policies(
    policies: &[Policy],
    processes: &[ProcessRecord],
    record_trace: bool,
) -> Result<Vec<SimulationReport>, SimulationError> {
    policies
        .iter()
        .map(|p| {
            let timeline = if record_trace {
                Timeline::traced()
            } else {
                Timeline::new()
            };
            p.simulate_on(processes, timeline)
        })
        .collect()
}

/// Validates `processes` and returns an arrival-ordered working copy.
fn prepare(processes: &[ProcessRecord]) -> Result<Vec<ProcessRecord>, SimulationError> {
    if let Err(errors) = validate_processes(processes) {
        warn!(count = errors.len(), "rejecting invalid process set");
        return Err(SimulationError::InvalidInput(errors));
    }
    working_copy(processes)
}
