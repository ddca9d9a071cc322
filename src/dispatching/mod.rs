//! Dispatching rules for choosing the next process.
//!
//! Every engine orders processes with a [`DispatchingRule`]. All rules
//! bottom out in [`arrival_order`], so two runs over the same input always
//! make the same choice, even when processes arrive together.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, DispatchingRule};
//! use u_cpusched::models::ProcessRecord;
//!
//! let long = ProcessRecord::new(1, 0, 4);
//! let short = ProcessRecord::new(2, 0, 2);
//!
//! // FIFO: equal arrivals fall back to pid
//! assert!(rules::Fifo.compare(&long, &short).is_lt());
//! // SPT: shorter burst wins
//! assert!(rules::Spt.compare(&short, &long).is_lt());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::ProcessRecord;

/// Total order by `(arrival_time, pid)`.
///
/// A lower pid is treated as having arrived first when arrival times are
/// equal. This is the tie-break shared by every engine.
pub fn arrival_order(a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
    a.arrival_time
        .cmp(&b.arrival_time)
        .then_with(|| a.pid.cmp(&b.pid))
}

/// A dispatching rule that orders processes by priority.
///
/// # Convention
/// `Ordering::Less` means `a` should be dispatched before `b`. Rules must
/// be total orders over processes with unique pids.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FIFO", "SPT").
    fn name(&self) -> &'static str;

    /// Compares two processes; the smaller one is dispatched first.
    fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Returns the highest-priority process, if any.
    fn select<'a, I>(&self, candidates: I) -> Option<(usize, &'a ProcessRecord)>
    where
        I: IntoIterator<Item = (usize, &'a ProcessRecord)>,
        Self: Sized,
    {
        candidates
            .into_iter()
            .min_by(|(_, a), (_, b)| self.compare(a, b))
    }
}
