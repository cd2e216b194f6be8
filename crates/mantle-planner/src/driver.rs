//! The synchronous turn loop.

use std::fmt;
use std::fmt::Write as _;

use log::{debug, info};
use mantle_core::Action;
use mantle_proto::{Boundary, BoundaryError, OracleError, PathOracle, Status};
use rand::Rng;

use crate::metrics::PlannerMetrics;
use crate::planner::{Decision, Planner};

/// What a completed run did, action by action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    /// Turns driven (one action each).
    pub turns: u64,
    /// Movement actions emitted.
    pub moves: u64,
    /// Rotation actions emitted.
    pub rotations: u64,
    /// Manipulator attachments emitted.
    pub attachments: u64,
    /// The full emitted action sequence, in order.
    pub actions: Vec<Action>,
    /// Planner counters accumulated over the run.
    pub planner: PlannerMetrics,
}

impl RunReport {
    /// The concatenated wire codes of every emitted action, the form the
    /// original solutions were submitted in.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for action in &self.actions {
            let _ = write!(out, "{action}");
        }
        out
    }

    fn record(&mut self, action: Action) {
        self.turns += 1;
        match action {
            Action::Move(_) => self.moves += 1,
            Action::Rotate(_) => self.rotations += 1,
            Action::Attach(_) => self.attachments += 1,
        }
        self.actions.push(action);
    }
}

/// Terminal failures of a run.
///
/// An empty unwrapped set is *not* an error; it is the success terminal
/// and surfaces as `Ok(RunReport)`.
#[derive(Debug)]
pub enum RunError {
    /// The path oracle failed; the run halts.
    Oracle(OracleError),
    /// The boundary transport failed.
    Boundary(BoundaryError),
    /// The engine rejected a submitted action. No retry, no rerouting:
    /// the run ends and the caller reports it.
    ActionRejected {
        /// The rejected action.
        action: Action,
        /// The engine's status string.
        status: String,
        /// The turn on which it happened (1-based).
        turn: u64,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oracle(e) => write!(f, "oracle: {e}"),
            Self::Boundary(e) => write!(f, "boundary: {e}"),
            Self::ActionRejected {
                action,
                status,
                turn,
            } => write!(f, "action {action} rejected on turn {turn}: {status}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Oracle(e) => Some(e),
            Self::Boundary(e) => Some(e),
            Self::ActionRejected { .. } => None,
        }
    }
}

impl From<OracleError> for RunError {
    fn from(e: OracleError) -> Self {
        Self::Oracle(e)
    }
}

impl From<BoundaryError> for RunError {
    fn from(e: BoundaryError) -> Self {
        Self::Boundary(e)
    }
}

/// Drive `planner` against `session` until the map is wrapped or a
/// terminal failure occurs.
///
/// Strictly synchronous: one action out, one snapshot back, blocking at
/// every step. There is no mid-turn cancellation; a caller wanting to
/// stop early simply does not call this again.
pub fn run<R, S>(planner: &mut Planner<R>, session: &mut S) -> Result<RunReport, RunError>
where
    R: Rng,
    S: Boundary + PathOracle,
{
    let mut view = session.state()?;
    if let Status::Error(status) = &view.status {
        return Err(RunError::Boundary(BoundaryError::Malformed {
            detail: format!("initial state status: {status}"),
        }));
    }

    let mut report = RunReport::default();
    loop {
        match planner.decide(&view, session)? {
            Decision::Complete => {
                session.exit()?;
                report.planner = planner.metrics().clone();
                info!(
                    "run complete: {} turns, {} moves, {} rotations, {} attachments",
                    report.turns, report.moves, report.rotations, report.attachments
                );
                return Ok(report);
            }
            Decision::Act(action) => {
                let reply = session.submit(&action)?;
                planner.commit();
                report.record(action);
                match reply.status {
                    Status::Ok => {
                        debug!(
                            "turn {}: {} -> {} cells unwrapped",
                            report.turns,
                            action,
                            reply.unwrapped.len()
                        );
                        view = reply;
                    }
                    Status::Error(status) => {
                        planner.halt();
                        report.planner = planner.metrics().clone();
                        return Err(RunError::ActionRejected {
                            action,
                            status,
                            turn: report.turns,
                        });
                    }
                }
            }
        }
    }
}
