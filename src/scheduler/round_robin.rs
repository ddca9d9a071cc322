//! Preemptive Round Robin.
//!
//! # Algorithm
//!
//! 1. Order processes by arrival (ties by pid); every process owes its
//!    full burst and has not started.
//! 2. Start the clock at the first arrival.
//! 3. Until every process completes:
//!    a. Admit every not-yet-admitted process that has arrived, in arrival
//!       order, at the tail of the ready queue.
//!    b. If the queue is empty, idle until the next arrival and go to (a).
//!    c. Dequeue the head; its first dispatch fixes its response time.
//!    d. Run it for `min(remaining, quantum)` ticks.
//!    e. If it has finished, record its completion.
//!    f. Otherwise admit processes that arrived during the slice **before**
//!       putting the preempted process back at the tail.
//!
//! Rule (f) is the conventional tie-break: a process arriving at the exact
//! tick a slice ends is queued ahead of the process that was just preempted.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.4

use std::collections::VecDeque;

use tracing::debug;

use super::{prepare, Policy, SimulationReport};
use crate::error::SimulationError;
use crate::models::{Metrics, ProcessOutcome, ProcessRecord};
use crate::simulation::{buffer, Timeline};

/// Simulates Round Robin with the given time quantum.
///
/// # Errors
/// [`SimulationError::InvalidQuantum`] if `quantum <= 0`, checked before the
/// process set is validated.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::round_robin;
///
/// let processes = vec![ProcessRecord::new(1, 0, 5), ProcessRecord::new(2, 0, 3)];
/// let report = round_robin(&processes, 2).unwrap();
/// let order: Vec<u32> = report.trace.iter().map(|s| s.pid).collect();
/// assert_eq!(order, vec![1, 2, 1, 2, 1]);
/// assert_eq!(report.metrics.avg_waiting, 3.5);
/// ```
pub fn round_robin(
    processes: &[ProcessRecord],
    quantum: i64,
) -> Result<SimulationReport, SimulationError> {
    round_robin_on(processes, quantum, Timeline::traced())
}

/// Average turnaround, waiting and response under Round Robin.
///
/// No execution trace is recorded.
pub fn rr_metrics(processes: &[ProcessRecord], quantum: i64) -> Result<Metrics, SimulationError> {
    round_robin_on(processes, quantum, Timeline::new()).map(|r| r.metrics)
}

pub(crate) fn round_robin_on(
    processes: &[ProcessRecord],
    quantum: i64,
    mut timeline: Timeline,
) -> Result<SimulationReport, SimulationError> {
    if quantum <= 0 {
        return Err(SimulationError::InvalidQuantum(quantum));
    }

    let mut procs = prepare(processes)?;
    let n = procs.len();
    debug!(n, quantum, traced = timeline.is_traced(), "simulating Round Robin");

    let mut ready: VecDeque<usize> = VecDeque::new();
    ready
        .try_reserve_exact(n)
        .map_err(SimulationError::capacity(n))?;
    let mut outcomes = buffer(n)?;
    let mut next_arrival = 0;
    let mut completed = 0;

    if let Some(first) = procs.first() {
        timeline.idle_until(first.arrival_time);
    }

    while completed < n {
        admit(&procs, &mut next_arrival, timeline.now(), &mut ready);

        let Some(idx) = ready.pop_front() else {
            match procs.get(next_arrival) {
                Some(p) => {
                    timeline.idle_until(p.arrival_time);
                    continue;
                }
                None => break,
            }
        };

        let p = &mut procs[idx];
        let start = *p.start_time.get_or_insert(timeline.now());
        let ticks = p.remaining_time.min(quantum);
        let slice = timeline.run(p.pid, ticks)?;
        p.remaining_time -= ticks;

        if p.remaining_time == 0 {
            outcomes.push(ProcessOutcome {
                pid: p.pid,
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                start_time: start,
                completion_time: slice.end,
            });
            completed += 1;
        } else {
            admit(&procs, &mut next_arrival, timeline.now(), &mut ready);
            ready.push_back(idx);
        }
    }

    Ok(SimulationReport::new(
        Policy::RoundRobin { quantum },
        outcomes,
        timeline,
    ))
}

/// Moves every process that has arrived by `now` into the ready queue.
fn admit(procs: &[ProcessRecord], next: &mut usize, now: i64, ready: &mut VecDeque<usize>) {
    while let Some(p) = procs.get(*next) {
        if p.arrival_time > now {
            break;
        }
        ready.push_back(*next);
        *next += 1;
    }
}
