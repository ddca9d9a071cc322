//! Shared simulation primitives.
//!
//! Engines never share state with each other; each builds its own
//! [`Timeline`] and its own working copy of the input.

mod timeline;

pub use timeline::Timeline;

use crate::dispatching::{rules::Fifo, DispatchingRule};
use crate::error::SimulationError;
use crate::models::ProcessRecord;

/// Allocates an empty buffer able to hold `capacity` entries.
pub(crate) fn buffer<T>(capacity: usize) -> Result<Vec<T>, SimulationError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(SimulationError::capacity(capacity))?;
    Ok(buf)
}

/// Copies `processes` into a fresh, arrival-ordered working buffer.
///
/// Simulation state on the copies is reset, so the caller's records are
/// never read for anything but their input fields.
pub(crate) fn working_copy(
    processes: &[ProcessRecord],
) -> Result<Vec<ProcessRecord>, SimulationError> {
    let mut procs = buffer(processes.len())?;
    procs.extend(processes.iter().map(ProcessRecord::reset));
    procs.sort_by(|a, b| Fifo.compare(a, b));
    Ok(procs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_copy_sorts_and_resets() {
        let mut started = ProcessRecord::new(1, 3, 2);
        started.start_time = Some(3);
        started.remaining_time = 0;
        let input = vec![started, ProcessRecord::new(2, 0, 4)];

        let copy = working_copy(&input).unwrap();
        assert_eq!(copy[0].pid, 2);
        assert_eq!(copy[1], ProcessRecord::new(1, 3, 2));
        // Input untouched
        assert_eq!(input[0].start_time, Some(3));
    }
}
