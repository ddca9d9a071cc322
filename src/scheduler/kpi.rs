//! Schedule quality metrics.
//!
//! Reduces a finished simulation into averages and whole-run indicators.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy ticks / (makespan - first arrival) |
//!
//! An empty run has all-zero metrics; nothing here divides by zero.

use super::SimulationReport;
use crate::models::{Metrics, ProcessOutcome};

impl Metrics {
    /// Averages turnaround, waiting and response over `outcomes`.
    ///
    /// Returns `Metrics::default()` for an empty slice.
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }

        // Sums of i64 ticks can exceed i64; i128 holds any realistic n.
        let mut total_turnaround: i128 = 0;
        let mut total_waiting: i128 = 0;
        let mut total_response: i128 = 0;
        for o in outcomes {
            total_turnaround += i128::from(o.turnaround());
            total_waiting += i128::from(o.waiting());
            total_response += i128::from(o.response());
        }

        let n = outcomes.len() as f64;
        Self {
            avg_turnaround: total_turnaround as f64 / n,
            avg_waiting: total_waiting as f64 / n,
            avg_response: total_response as f64 / n,
        }
    }
}

impl SimulationReport {
    /// Latest completion time, 0 for an empty run.
    pub fn makespan(&self) -> i64 {
        self.outcomes
            .iter()
            .map(|o| o.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Fraction of the span from first arrival to makespan spent running.
    ///
    /// 0.0 for an empty run.
    pub fn cpu_utilization(&self) -> f64 {
        let Some(first_arrival) = self.outcomes.iter().map(|o| o.arrival_time).min() else {
            return 0.0;
        };
        let span = self.makespan() - first_arrival;
        if span <= 0 {
            return 0.0;
        }
        let busy: i128 = self.outcomes.iter().map(|o| i128::from(o.burst_time)).sum();
        busy as f64 / span as f64
    }
}
