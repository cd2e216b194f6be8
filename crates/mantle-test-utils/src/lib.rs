//! Test utilities and mock boundaries for Mantle development.
//!
//! Provides [`ScriptedOracle`] for pinning oracle replies in unit tests,
//! [`GridSim`](sim::GridSim) (a small in-memory engine implementing the
//! boundary and oracle traits), and snapshot fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use mantle_core::{Action, Point};
use mantle_proto::{OracleError, PathOracle};

pub mod fixtures;
pub mod sim;

pub use sim::GridSim;

/// A [`PathOracle`] that answers from a pre-scripted table.
///
/// Unknown targets report [`OracleError::Unavailable`]; a scripted empty
/// path reports [`OracleError::EmptyPath`], mirroring the real client.
/// Every query is recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedOracle {
    responses: HashMap<Point, Vec<Action>>,
    queries: Vec<Point>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply for `target`. Repeated queries get the same reply.
    pub fn respond(&mut self, target: Point, path: Vec<Action>) {
        self.responses.insert(target, path);
    }

    /// Every target queried so far, in order.
    pub fn queries(&self) -> &[Point] {
        &self.queries
    }
}

impl PathOracle for ScriptedOracle {
    fn request_path(&mut self, target: Point) -> Result<Vec<Action>, OracleError> {
        self.queries.push(target);
        let path = self
            .responses
            .get(&target)
            .cloned()
            .ok_or_else(|| OracleError::Unavailable {
                reason: format!("no scripted path to {target}"),
            })?;
        if path.is_empty() {
            return Err(OracleError::EmptyPath { target });
        }
        Ok(path)
    }
}
