//! Simulation results: per-process outcomes and aggregate metrics.

use serde::{Deserialize, Serialize};

/// A finished process.
///
/// Recorded once, at the end of the process's final CPU slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// Process identifier.
    pub pid: u32,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Total CPU ticks consumed.
    pub burst_time: i64,
    /// Tick of first dispatch.
    pub start_time: i64,
    /// Tick at which the process finished.
    pub completion_time: i64,
}

impl ProcessOutcome {
    /// Completion minus arrival.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion_time - self.arrival_time
    }

    /// Turnaround minus burst: time spent ready but not running.
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst_time
    }

    /// First dispatch minus arrival.
    #[inline]
    pub fn response(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

/// Average performance over all processes of one run.
///
/// An empty run yields `Metrics::default()` (all zeros).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_derived_times() {
        let o = ProcessOutcome {
            pid: 1,
            arrival_time: 2,
            burst_time: 3,
            start_time: 4,
            completion_time: 9,
        };
        assert_eq!(o.turnaround(), 7);
        assert_eq!(o.waiting(), 4);
        assert_eq!(o.response(), 2);
    }

    #[test]
    fn test_default_metrics_are_zero() {
        let m = Metrics::default();
        assert_eq!(m.avg_turnaround, 0.0);
        assert_eq!(m.avg_waiting, 0.0);
        assert_eq!(m.avg_response, 0.0);
    }
}
