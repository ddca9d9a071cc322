//! Error types for simulation entry points.

use std::collections::TryReserveError;

use crate::validation::ValidationError;

/// Errors returned by the scheduling engines.
///
/// Input problems are detected before the simulation loop starts; clock
/// overflow and allocation failure abort the run. There is no partial
/// result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The process set failed validation.
    #[error("invalid process set: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Round Robin was given a non-positive time quantum.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// The simulation clock would pass `i64::MAX` while running `pid`.
    #[error("simulation clock overflowed while running process {pid}")]
    ClockOverflow {
        /// Process being dispatched when the clock overflowed.
        pid: u32,
    },

    /// A working buffer sized by the input could not be allocated.
    #[error("cannot allocate working buffer for {requested} entries")]
    Capacity {
        /// Number of entries that were requested.
        requested: usize,
    },
}

impl SimulationError {
    pub(crate) fn capacity(requested: usize) -> impl FnOnce(TryReserveError) -> Self {
        move |_| Self::Capacity { requested }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
