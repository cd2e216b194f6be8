//! The per-turn decision engine.

use indexmap::IndexSet;
use log::{debug, trace};
use mantle_core::{Action, Heading, Offset, Point};
use mantle_proto::{OracleError, PathOracle, Snapshot};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cache::PlanCache;
use crate::config::{ConfigError, PlannerConfig};
use crate::manipulator::ManipulatorScheduler;
use crate::metrics::PlannerMetrics;

/// Cardinal neighbour scan order for the rotate rule.
const SCAN: [Offset; 4] = [
    Offset::new(1, 0),  // east
    Offset::new(0, 1),  // north
    Offset::new(-1, 0), // west
    Offset::new(0, -1), // south
];

/// The planner's verdict for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Submit this action, then call [`Planner::commit`].
    Act(Action),
    /// No unwrapped cells remain (or the planner was halted); the run is
    /// over and no further decisions will be produced.
    Complete,
}

/// Side effects staged by `decide`, applied once by `commit`.
#[derive(Debug)]
enum Staged {
    Nothing,
    Attach,
    Drain,
    Replan {
        destination: Point,
        path: Vec<Action>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Active,
    Terminal,
}

/// The grid-wrapping traversal planner.
///
/// Owns only the plan cache and the pending manipulator offsets; all
/// other state arrives fresh in each turn's snapshot. Per turn the
/// decision priority is: attach a manipulator, rotate toward an adjacent
/// unwrapped cell, drain the cached plan, or replan via the path oracle.
///
/// # Decide/commit protocol
///
/// [`decide`](Planner::decide) computes the turn's action and *stages*
/// its consumption; calling it again with an unchanged snapshot returns
/// the same action. [`commit`](Planner::commit) applies the staged
/// consumption exactly once, after the action has been submitted to the
/// engine. The replanning RNG is only consumed at commit, since the
/// emitted action is the path's first element regardless of how much of
/// the path gets cached.
#[derive(Debug)]
pub struct Planner<R = ChaCha8Rng> {
    cache: PlanCache,
    manips: ManipulatorScheduler,
    rng: R,
    phase: Phase,
    staged: Staged,
    metrics: PlannerMetrics,
}

impl Planner<ChaCha8Rng> {
    /// Build a planner with a ChaCha8 RNG seeded from the config.
    pub fn new(config: PlannerConfig) -> Result<Self, ConfigError> {
        let seed = config.seed;
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Planner<R> {
    /// Build a planner with an explicitly injected RNG.
    pub fn with_rng(config: PlannerConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cache: PlanCache::new(config.max_plan_prefix),
            manips: ManipulatorScheduler::new(config.manipulator_layout),
            rng,
            phase: Phase::Active,
            staged: Staged::Nothing,
            metrics: PlannerMetrics::default(),
        })
    }

    /// Decide this turn's action from a fresh snapshot.
    ///
    /// Repeat-safe: an unchanged snapshot yields the same decision. The
    /// only mutation is staging; consumption happens at
    /// [`commit`](Planner::commit).
    ///
    /// # Errors
    ///
    /// Propagates [`OracleError`] from the path oracle; fatal for the
    /// run, never retried here.
    pub fn decide(
        &mut self,
        view: &Snapshot,
        oracle: &mut dyn PathOracle,
    ) -> Result<Decision, OracleError> {
        if self.phase == Phase::Terminal {
            return Ok(Decision::Complete);
        }

        // The authoritative per-turn view: wire order, first occurrence
        // wins. Both tie-breaks below iterate it in this order.
        let unwrapped: IndexSet<Point> = view.unwrapped.iter().copied().collect();
        if unwrapped.is_empty() {
            debug!("coverage complete");
            self.phase = Phase::Terminal;
            self.staged = Staged::Nothing;
            return Ok(Decision::Complete);
        }

        // 1. Attach a pending manipulator. Preempts movement entirely.
        if self.manips.should_attach(&view.agent) {
            if let Some(offset) = self.manips.peek() {
                trace!("attaching manipulator at {offset}");
                self.staged = Staged::Attach;
                return Ok(Decision::Act(Action::Attach(offset)));
            }
        }

        // 2. Rotate toward the first unwrapped cardinal neighbour. The
        // cache survives this rule: its destination is still legitimate,
        // it just is not consumed this turn.
        for delta in SCAN {
            let neighbour = view.agent.position + delta;
            if !unwrapped.contains(&neighbour) {
                continue;
            }
            let required = Heading::toward(delta);
            if let Some(rotation) = view.agent.heading.rotation_toward(required) {
                trace!("rotating toward unwrapped neighbour {neighbour}");
                self.staged = Staged::Nothing;
                return Ok(Decision::Act(Action::Rotate(rotation)));
            }
            // Already facing the first unwrapped neighbour; rotating
            // would spin in place. Fall through to the cache rules.
            break;
        }

        // 3. Drain the cached plan while its destination stays unwrapped.
        if let Some(destination) = self.cache.peek_destination() {
            if unwrapped.contains(&destination) {
                if let Some(action) = self.cache.peek_next() {
                    self.staged = Staged::Drain;
                    return Ok(Decision::Act(*action));
                }
            }
        }

        // 4. Replan: nearest unwrapped cell by Manhattan distance, first
        // encountered wins ties.
        let Some(target) = nearest_unwrapped(view.agent.position, &unwrapped) else {
            // Unreachable: the set was checked non-empty above.
            self.phase = Phase::Terminal;
            return Ok(Decision::Complete);
        };
        let path = oracle.request_path(target)?;
        let Some(first) = path.first().copied() else {
            return Err(OracleError::EmptyPath { target });
        };
        debug!(
            "replanning toward {target}, {} cells unwrapped",
            unwrapped.len()
        );
        self.staged = Staged::Replan {
            destination: target,
            path,
        };
        Ok(Decision::Act(first))
    }

    /// Apply the consumption staged by the last [`decide`](Planner::decide).
    ///
    /// Call exactly once per submitted action. A no-op when nothing was
    /// staged (rotations consume no planner state).
    pub fn commit(&mut self) {
        match std::mem::replace(&mut self.staged, Staged::Nothing) {
            Staged::Nothing => {}
            Staged::Attach => {
                self.manips.next_attachment();
            }
            Staged::Drain => {
                self.cache.pop_next();
                self.metrics.cache_drains += 1;
            }
            Staged::Replan { destination, path } => {
                if self.cache.has_next() {
                    // A still-unfinished plan is being discarded: its
                    // destination left the unwrapped set.
                    self.metrics.invalidations += 1;
                }
                self.cache.replace(destination, &path, &mut self.rng);
                // The first action was just emitted; keep only the tail.
                self.cache.pop_next();
                self.metrics.replans += 1;
            }
        }
    }

    /// Latch the terminal phase after an observed failure. Subsequent
    /// [`decide`](Planner::decide) calls return [`Decision::Complete`].
    pub fn halt(&mut self) {
        self.phase = Phase::Terminal;
        self.staged = Staged::Nothing;
    }

    /// Whether the planner has reached its terminal phase.
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Counters accumulated over committed turns.
    pub fn metrics(&self) -> &PlannerMetrics {
        &self.metrics
    }
}

/// The unwrapped cell nearest to `from` by Manhattan distance.
///
/// Ties go to the first candidate encountered, so the caller's iteration
/// order is part of the policy; the planner passes its order-preserving
/// per-turn view.
pub fn nearest_unwrapped<'a, I>(from: Point, candidates: I) -> Option<Point>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut best: Option<(Point, u32)> = None;
    for &candidate in candidates {
        let distance = from.manhattan(candidate);
        match best {
            Some((_, shortest)) if shortest <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(point, _)| point)
}
