//! Process model.
//!
//! A process is a unit of CPU work known up front: it becomes eligible at
//! its arrival time and needs `burst_time` units of CPU to finish.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Only `pid`, `arrival_time` and `burst_time` are input. The remaining
/// fields are scratch state filled in by an engine on its private copy.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// They are signed so that malformed input can be detected and rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Unique process identifier. Breaks ties between equal arrivals.
    pub pid: u32,
    /// Tick at which the process becomes eligible.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// CPU ticks still owed (Round Robin only).
    #[serde(skip)]
    pub remaining_time: i64,
    /// Tick of first dispatch. `None` = never run.
    #[serde(skip)]
    pub start_time: Option<i64>,
    /// Tick at which the last slice finished.
    #[serde(skip)]
    pub completion_time: Option<i64>,
}

impl ProcessRecord {
    /// Creates a process that has not been simulated yet.
    pub fn new(pid: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
        }
    }

    /// Returns a fresh copy with all simulation state cleared.
    pub fn reset(&self) -> Self {
        Self::new(self.pid, self.arrival_time, self.burst_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process() {
        let p = ProcessRecord::new(3, 4, 7);
        assert_eq!(p.pid, 3);
        assert_eq!(p.arrival_time, 4);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut p = ProcessRecord::new(1, 0, 5);
        p.remaining_time = 0;
        p.start_time = Some(0);
        p.completion_time = Some(5);

        let fresh = p.reset();
        assert_eq!(fresh, ProcessRecord::new(1, 0, 5));
    }

    #[test]
    fn test_deserialize_input_fields_only() {
        let p: ProcessRecord =
            serde_json::from_str(r#"{"pid": 2, "arrival_time": 1, "burst_time": 4}"#).unwrap();
        assert_eq!(p.pid, 2);
        assert_eq!(p.arrival_time, 1);
        assert_eq!(p.burst_time, 4);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
    }

    #[test]
    fn test_serialize_skips_scratch_state() {
        let mut p = ProcessRecord::new(1, 0, 5);
        p.start_time = Some(0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("start_time"));
        assert!(!json.contains("remaining_time"));
    }
}
