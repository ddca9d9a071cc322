//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (ties by pid).
//! 2. For each process in order, idle until it arrives if the CPU is
//!    ahead of it, then run it to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use tracing::debug;

use super::{prepare, Policy, SimulationReport};
use crate::error::SimulationError;
use crate::models::{Metrics, ProcessOutcome, ProcessRecord};
use crate::simulation::{buffer, Timeline};

/// Simulates FCFS over `processes`.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::fcfs;
///
/// let report = fcfs(&[ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 0, 2)]).unwrap();
/// let order: Vec<u32> = report.trace.iter().map(|s| s.pid).collect();
/// assert_eq!(order, vec![1, 2]);
/// ```
pub fn fcfs(processes: &[ProcessRecord]) -> Result<SimulationReport, SimulationError> {
    fcfs_on(processes, Timeline::traced())
}

/// Average turnaround, waiting and response under FCFS.
///
/// No execution trace is recorded.
pub fn fcfs_metrics(processes: &[ProcessRecord]) -> Result<Metrics, SimulationError> {
    fcfs_on(processes, Timeline::new()).map(|r| r.metrics)
}

pub(crate) fn fcfs_on(
    processes: &[ProcessRecord],
    mut timeline: Timeline,
) -> Result<SimulationReport, SimulationError> {
    let procs = prepare(processes)?;
    debug!(n = procs.len(), traced = timeline.is_traced(), "simulating FCFS");

    let mut outcomes = buffer(procs.len())?;

    for p in &procs {
        timeline.idle_until(p.arrival_time);
        let slice = timeline.run(p.pid, p.burst_time)?;

        outcomes.push(ProcessOutcome {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            start_time: slice.start,
            completion_time: slice.end,
        });
    }

    Ok(SimulationReport::new(Policy::Fcfs, outcomes, timeline))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_broken_by_pid() {
        // Listed in reverse pid order on purpose
        let processes = vec![ProcessRecord::new(2, 0, 2), ProcessRecord::new(1, 0, 4)];
        let report = fcfs(&processes).unwrap();

        let completions: Vec<(u32, i64)> = report
            .outcomes
            .iter()
            .map(|o| (o.pid, o.completion_time))
            .collect();
        assert_eq!(completions, vec![(1, 4), (2, 6)]);
        assert!((report.metrics.avg_turnaround - 5.0).abs() < 1e-10);
        assert!((report.metrics.avg_waiting - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_idle_gap() {
        let processes = vec![ProcessRecord::new(1, 2, 3), ProcessRecord::new(2, 10, 1)];
        let report = fcfs(&processes).unwrap();

        assert_eq!(report.outcomes[0].start_time, 2);
        assert_eq!(report.outcomes[1].start_time, 10);
        assert_eq!(report.outcomes[1].completion_time, 11);
        assert!(report.metrics.avg_waiting.abs() < 1e-10);
    }

    #[test]
    fn test_classic_convoy() {
        // P1=24, P2=3, P3=3 all at t=0 → waiting 0, 24, 27
        let processes = vec![
            ProcessRecord::new(1, 0, 24),
            ProcessRecord::new(2, 0, 3),
            ProcessRecord::new(3, 0, 3),
        ];
        let m = fcfs_metrics(&processes).unwrap();
        assert!((m.avg_waiting - 17.0).abs() < 1e-10);
        assert!((m.avg_turnaround - 27.0).abs() < 1e-10);
        assert!((m.avg_response - 17.0).abs() < 1e-10);
    }

    #[test]
    fn test_staggered_arrivals() {
        // P1 (0,5) 0-5, P2 (1,3) 5-8, P3 (2,1) 8-9
        let processes = vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(2, 1, 3),
            ProcessRecord::new(3, 2, 1),
        ];
        let m = fcfs_metrics(&processes).unwrap();
        // turnaround 5, 7, 7
        assert!((m.avg_turnaround - 19.0 / 3.0).abs() < 1e-10);
        // waiting 0, 4, 6
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_run_records_no_trace() {
        let processes = vec![ProcessRecord::new(1, 0, 2), ProcessRecord::new(2, 1, 2)];
        let report = fcfs_on(&processes, Timeline::new()).unwrap();
        assert!(report.trace.is_empty());
        assert_eq!(report.metrics, fcfs(&processes).unwrap().metrics);
    }

    #[test]
    fn test_clock_overflow_is_an_error() {
        let processes = vec![ProcessRecord::new(1, i64::MAX - 1, 5)];
        assert_eq!(
            fcfs_metrics(&processes).unwrap_err(),
            SimulationError::ClockOverflow { pid: 1 }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(fcfs_metrics(&[]).unwrap(), Metrics::default());
    }
}
