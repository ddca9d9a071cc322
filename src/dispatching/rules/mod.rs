//! Built-in dispatching rules.
//!
//! - **FIFO**: arrival order (FCFS, Round Robin admission)
//! - **SPT**: shortest burst first (SJF)
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Smith (1956), "Various optimizers for single-stage production"

use std::cmp::Ordering;

use super::{arrival_order, DispatchingRule};
use crate::models::ProcessRecord;

/// First In First Out.
///
/// Orders by arrival time, then pid.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        arrival_order(a, b)
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Orders by burst time; equal bursts fall back to [`arrival_order`].
/// Minimizes mean flow time on a single machine when all jobs are ready.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        a.burst_time
            .cmp(&b.burst_time)
            .then_with(|| arrival_order(a, b))
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}
