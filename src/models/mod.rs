//! CPU-scheduling domain models.
//!
//! Provides the data types shared by every scheduling engine: the input
//! process, the finished outcome, aggregate metrics and the execution trace.
//!
//! # Lifecycle
//!
//! | Type | Produced by | Mutable |
//! |------|-------------|---------|
//! | ProcessRecord | caller | engine's private copy only |
//! | ExecutionSlice | timeline | no |
//! | ProcessOutcome | engine, at completion | no |
//! | Metrics | aggregator | no |

mod outcome;
mod process;
mod trace;

pub use outcome::{Metrics, ProcessOutcome};
pub use process::ProcessRecord;
pub use trace::ExecutionSlice;
