//! Simulation clock shared by every engine.

use tracing::trace;

use crate::error::SimulationError;
use crate::models::ExecutionSlice;

/// A single-CPU simulation clock with an optional execution trace.
///
/// The clock only moves forward, either by idling until a future arrival
/// or by running a process for some number of ticks. Traces are recorded
/// only when the timeline is built with [`Timeline::traced`]; back-to-back
/// runs of the same process are merged into one slice.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now: i64,
    slices: Option<Vec<ExecutionSlice>>,
}

impl Timeline {
    /// Creates an untraced timeline at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timeline at t=0 that records every executed slice.
    pub fn traced() -> Self {
        Self {
            now: 0,
            slices: Some(Vec::new()),
        }
    }

    /// Whether executed slices are being recorded.
    pub fn is_traced(&self) -> bool {
        self.slices.is_some()
    }

    /// Current tick.
    #[inline]
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Jumps the clock forward to `time` if it is behind (idle gap).
    ///
    /// Returns the length of the idle gap, 0 if the clock was already there.
    pub fn idle_until(&mut self, time: i64) -> i64 {
        if time > self.now {
            let gap = time - self.now;
            trace!(from = self.now, to = time, "cpu idle");
            self.now = time;
            gap
        } else {
            0
        }
    }

    /// Runs `pid` for `ticks`, returning the slice that was executed.
    ///
    /// # Errors
    /// - [`SimulationError::ClockOverflow`] if the clock would pass `i64::MAX`.
    /// - [`SimulationError::Capacity`] if the trace cannot grow.
    pub fn run(&mut self, pid: u32, ticks: i64) -> Result<ExecutionSlice, SimulationError> {
        debug_assert!(ticks > 0, "slices must make progress");
        let end = self
            .now
            .checked_add(ticks)
            .ok_or(SimulationError::ClockOverflow { pid })?;
        let slice = ExecutionSlice::new(pid, self.now, end);
        trace!(pid, start = slice.start, end = slice.end, "dispatch");
        self.now = end;

        if let Some(slices) = &mut self.slices {
            match slices.last_mut() {
                Some(last) if last.pid == pid && last.end == slice.start => last.end = slice.end,
                _ => {
                    slices
                        .try_reserve(1)
                        .map_err(SimulationError::capacity(slices.len() + 1))?;
                    slices.push(slice);
                }
            }
        }
        Ok(slice)
    }

    /// Consumes the timeline, yielding its trace (empty if untraced).
    pub fn into_slices(self) -> Vec<ExecutionSlice> {
        self.slices.unwrap_or_default()
    }
}
