//! Non-preemptive Shortest-Job-First.
//!
//! # Algorithm
//!
//! 1. Keep the unscheduled processes in arrival order.
//! 2. At each decision point, consider only processes that have arrived by
//!    the current clock and pick the shortest burst (ties: earlier arrival,
//!    then lower pid).
//! 3. If nothing has arrived yet, jump the clock to the earliest pending
//!    arrival and decide again.
//! 4. Run the chosen process to completion and remove it.
//!
//! # Complexity
//! O(n²): each decision scans the arrived prefix of the pending set.

use tracing::debug;

use super::{prepare, Policy, SimulationReport};
use crate::dispatching::{rules::Spt, DispatchingRule};
use crate::error::SimulationError;
use crate::models::{Metrics, ProcessOutcome, ProcessRecord};
use crate::simulation::{buffer, Timeline};

/// Simulates non-preemptive SJF over `processes`.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::sjf;
///
/// let report = sjf(&[ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 0, 2)]).unwrap();
/// let order: Vec<u32> = report.trace.iter().map(|s| s.pid).collect();
/// assert_eq!(order, vec![2, 1]);
/// ```
pub fn sjf(processes: &[ProcessRecord]) -> Result<SimulationReport, SimulationError> {
    sjf_on(processes, Timeline::traced())
}

/// Average turnaround, waiting and response under non-preemptive SJF.
///
/// No execution trace is recorded.
pub fn sjf_metrics(processes: &[ProcessRecord]) -> Result<Metrics, SimulationError> {
    sjf_on(processes, Timeline::new()).map(|r| r.metrics)
}

pub(crate) fn sjf_on(
    processes: &[ProcessRecord],
    mut timeline: Timeline,
) -> Result<SimulationReport, SimulationError> {
    let mut pending = prepare(processes)?;
    debug!(n = pending.len(), traced = timeline.is_traced(), "simulating SJF");

    let mut outcomes = buffer(pending.len())?;

    while !pending.is_empty() {
        let now = timeline.now();
        // `pending` is arrival-ordered, so the arrived set is a prefix.
        let arrived = pending
            .iter()
            .enumerate()
            .take_while(|(_, p)| p.arrival_time <= now);

        let Some((idx, _)) = Spt.select(arrived) else {
            timeline.idle_until(pending[0].arrival_time);
            continue;
        };

        let p = pending.remove(idx);
        let slice = timeline.run(p.pid, p.burst_time)?;

        outcomes.push(ProcessOutcome {
            pid: p.pid,
            arrival_time: p.arrival_time,
            burst_time: p.burst_time,
            start_time: slice.start,
            completion_time: slice.end,
        });
    }

    Ok(SimulationReport::new(Policy::Sjf, outcomes, timeline))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_order(processes: &[ProcessRecord]) -> Vec<u32> {
        sjf(processes).unwrap().trace.iter().map(|s| s.pid).collect()
    }

    #[test]
    fn test_shortest_first_at_tie() {
        let processes = vec![ProcessRecord::new(1, 0, 4), ProcessRecord::new(2, 0, 2)];
        let report = sjf(&processes).unwrap();

        let completions: Vec<(u32, i64)> = report
            .outcomes
            .iter()
            .map(|o| (o.pid, o.completion_time))
            .collect();
        assert_eq!(completions, vec![(2, 2), (1, 6)]);
        assert!((report.metrics.avg_turnaround - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_only_arrived_processes_considered() {
        // P2 is shorter but has not arrived when P1 is chosen at t=0
        let processes = vec![ProcessRecord::new(1, 0, 6), ProcessRecord::new(2, 1, 1)];
        assert_eq!(run_order(&processes), vec![1, 2]);
    }

    #[test]
    fn test_non_preemptive() {
        // P3 arrives mid-run of P1 and must wait even though it is shorter
        let processes = vec![
            ProcessRecord::new(1, 0, 8),
            ProcessRecord::new(2, 1, 4),
            ProcessRecord::new(3, 2, 2),
        ];
        assert_eq!(run_order(&processes), vec![1, 3, 2]);

        let m = sjf_metrics(&processes).unwrap();
        // P1 0-8, P3 8-10, P2 10-14 → turnaround 8, 8, 13
        assert!((m.avg_turnaround - 29.0 / 3.0).abs() < 1e-10);
        // waiting 0, 6, 9
        assert!((m.avg_waiting - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_equal_burst_tie_breaks_by_arrival_then_pid() {
        let processes = vec![
            ProcessRecord::new(1, 0, 5),
            ProcessRecord::new(4, 2, 3),
            ProcessRecord::new(3, 1, 3),
            ProcessRecord::new(2, 1, 3),
        ];
        // At t=5 all have arrived; bursts tie at 3 → arrival 1 (pids 2, 3), then 4
        assert_eq!(run_order(&processes), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_ready_set_jumps_clock() {
        // Nothing at t=0; after P1 finishes at 5 nothing is ready until t=20
        let processes = vec![
            ProcessRecord::new(1, 3, 2),
            ProcessRecord::new(2, 20, 4),
            ProcessRecord::new(3, 20, 1),
        ];
        let report = sjf(&processes).unwrap();

        assert_eq!(report.outcomes[0].start_time, 3);
        assert_eq!(report.outcomes[1].pid, 3);
        assert_eq!(report.outcomes[1].start_time, 20);
        assert_eq!(report.outcomes[2].completion_time, 25);
        assert_eq!(report.outcomes.len(), 3);
    }

    #[test]
    fn test_late_short_job_after_gap() {
        // Input order deliberately unsorted
        let processes = vec![
            ProcessRecord::new(3, 10, 1),
            ProcessRecord::new(1, 0, 2),
            ProcessRecord::new(2, 10, 5),
        ];
        assert_eq!(run_order(&processes), vec![1, 3, 2]);
    }

    #[test]
    fn test_response_equals_waiting() {
        let processes = vec![
            ProcessRecord::new(1, 0, 7),
            ProcessRecord::new(2, 2, 4),
            ProcessRecord::new(3, 4, 1),
            ProcessRecord::new(4, 5, 4),
        ];
        let m = sjf_metrics(&processes).unwrap();
        assert!((m.avg_response - m.avg_waiting).abs() < 1e-10);
        // P1 0-7, P3 7-8, P2 8-12, P4 12-16 → waiting 0, 6, 3, 7
        assert!((m.avg_waiting - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_clock_overflow_is_an_error() {
        // P1 ends near the top of the clock range, P2 cannot fit after it
        let processes = vec![
            ProcessRecord::new(1, i64::MAX - 10, 8),
            ProcessRecord::new(2, i64::MAX - 9, 4),
        ];
        assert_eq!(
            sjf_metrics(&processes).unwrap_err(),
            SimulationError::ClockOverflow { pid: 2 }
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(sjf_metrics(&[]).unwrap(), Metrics::default());
    }
}
