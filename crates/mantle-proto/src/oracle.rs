//! The path oracle seam.

use mantle_core::{Action, Point};

use crate::error::OracleError;

/// External shortest-path capability exposed by the engine.
///
/// Given a target cell, an oracle returns the ordered action sequence
/// that reaches it from the agent's current position, assuming the grid
/// does not change underneath. No optimality is promised, only that
/// following the sequence arrives.
///
/// Failures are fatal for the current turn: callers propagate them
/// upward rather than retrying silently.
pub trait PathOracle {
    /// Request a route from the agent's current position to `target`.
    fn request_path(&mut self, target: Point) -> Result<Vec<Action>, OracleError>;
}
