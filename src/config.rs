//! Library defaults.

/// Round Robin quantum used when none is given.
pub const DEFAULT_QUANTUM: i64 = 2;

/// Default number of processes in a generated workload.
pub const DEFAULT_PROCESS_COUNT: u32 = 10;

/// Default latest arrival tick in a generated workload.
pub const DEFAULT_MAX_ARRIVAL: i64 = 20;

/// Default shortest burst in a generated workload.
pub const DEFAULT_MIN_BURST: i64 = 1;

/// Default longest burst in a generated workload.
pub const DEFAULT_MAX_BURST: i64 = 10;
