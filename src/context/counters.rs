//! Counters over the life of a context.

use std::time::Duration;

/// Counts of the work done during a search, for logs and curiosity --- none influences the search.
#[derive(Debug, Default)]
pub struct Counters {
    /// The number of levels saturated.
    pub levels: usize,

    /// The number of resolvents formed, kept or not.
    pub resolvents: usize,

    /// Resolvents discarded as tautologies.
    pub tautologies: usize,

    /// Resolvents discarded as subsumed by some stored clause.
    pub forward_subsumed: usize,

    /// Stored clauses retired by a strictly subsuming resolvent.
    pub backward_subsumed: usize,

    /// The time taken by the search.
    pub time: Duration,
}
