//! Execution trace (Gantt chart) model.

use serde::{Deserialize, Serialize};

/// One contiguous run of a process on the CPU, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that held the CPU.
    pub pid: u32,
    /// First tick of the slice.
    pub start: i64,
    /// Tick after the last one of the slice.
    pub end: i64,
}

impl ExecutionSlice {
    /// Creates a slice.
    pub fn new(pid: u32, start: i64, end: i64) -> Self {
        Self { pid, start, end }
    }

    /// Length of the slice in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}
