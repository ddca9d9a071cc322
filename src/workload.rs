//! Synthetic workload generation.
//!
//! Produces valid, reproducible process sets for comparing policies and
//! for property-style tests. The same seed always yields the same set.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::ProcessRecord;

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of processes; pids run `1..=count`.
    pub count: u32,
    /// Latest possible arrival tick (inclusive).
    pub max_arrival: i64,
    /// Shortest possible burst (clamped to at least 1).
    pub min_burst: i64,
    /// Longest possible burst (clamped to at least `min_burst`).
    pub max_burst: i64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: config::DEFAULT_PROCESS_COUNT,
            max_arrival: config::DEFAULT_MAX_ARRIVAL,
            min_burst: config::DEFAULT_MIN_BURST,
            max_burst: config::DEFAULT_MAX_BURST,
            seed: 0,
        }
    }
}

/// Generates a random process set that always passes validation.
///
/// # Example
///
/// ```
/// use u_cpusched::workload::{generate, WorkloadConfig};
/// use u_cpusched::validation::validate_processes;
///
/// let config = WorkloadConfig { count: 5, seed: 42, ..Default::default() };
/// let processes = generate(&config);
/// assert_eq!(processes.len(), 5);
/// assert!(validate_processes(&processes).is_ok());
/// assert_eq!(processes, generate(&config));
/// ```
pub fn generate(config: &WorkloadConfig) -> Vec<ProcessRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let max_arrival = config.max_arrival.max(0);
    let min_burst = config.min_burst.max(1);
    let max_burst = config.max_burst.max(min_burst);

    (1..=config.count)
        .map(|pid| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            ProcessRecord::new(pid, arrival, burst)
        })
        .collect()
}
