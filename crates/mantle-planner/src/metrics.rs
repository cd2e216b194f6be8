//! Per-run planner counters.

/// Counters the planner accumulates over committed turns.
///
/// Populated by [`Planner::commit`](crate::Planner::commit); the driver
/// folds them into the final [`RunReport`](crate::RunReport).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlannerMetrics {
    /// Turns satisfied from the plan cache without an oracle query.
    pub cache_drains: u64,
    /// Turns that queried the oracle and cached a fresh prefix.
    pub replans: u64,
    /// Replans that discarded a still-unfinished cached plan.
    pub invalidations: u64,
}
