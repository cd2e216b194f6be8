//! Opportunistic manipulator attachment scheduling.

use std::collections::VecDeque;

use mantle_core::{AgentState, Offset};

/// Decides when and where to attach pending manipulator offsets.
///
/// The offsets are a static placement plan fixed at construction and
/// consumed front to back, never reordered. Once exhausted, later
/// attachment opportunities are simply skipped.
#[derive(Debug)]
pub struct ManipulatorScheduler {
    pending: VecDeque<Offset>,
}

impl ManipulatorScheduler {
    /// Create a scheduler with the given placement plan.
    pub fn new(layout: Vec<Offset>) -> Self {
        Self {
            pending: layout.into(),
        }
    }

    /// Whether an attachment should happen this turn: the agent holds an
    /// unconsumed extender token and offsets remain pending.
    pub fn should_attach(&self, agent: &AgentState) -> bool {
        agent.inventory.has_extender() && !self.pending.is_empty()
    }

    /// The next offset to attach, without consuming it.
    pub fn peek(&self) -> Option<Offset> {
        self.pending.front().copied()
    }

    /// Consume and return the next offset.
    ///
    /// The caller emits the attach action and must not consume twice for
    /// the same turn.
    pub fn next_attachment(&mut self) -> Option<Offset> {
        self.pending.pop_front()
    }

    /// Offsets still pending.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}
