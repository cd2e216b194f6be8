//! Per-turn agent state as observed in a snapshot.

use std::fmt;

use crate::heading::Heading;
use crate::point::{Offset, Point};

/// A held item, identified by its inventory token.
///
/// The planner only acts on [`Item::Extender`] (token `B`, the one-shot
/// manipulator extender); other tokens are preserved verbatim so the
/// snapshot remains a faithful view of the reply.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// A manipulator extender token (`B`).
    Extender,
    /// Any other item token, carried through untouched.
    Other(String),
}

impl Item {
    /// Classify a raw inventory token.
    pub fn from_token(token: &str) -> Item {
        match token {
            "B" => Self::Extender,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire token for this item.
    pub fn token(&self) -> &str {
        match self {
            Self::Extender => "B",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The agent's held items for one turn.
///
/// A fresh view supplied with every snapshot; the engine removes consumed
/// tokens itself, so there is no bookkeeping here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Build an inventory from raw wire tokens.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            items: tokens.into_iter().map(Item::from_token).collect(),
        }
    }

    /// Whether an unconsumed manipulator extender is held.
    pub fn has_extender(&self) -> bool {
        self.items.iter().any(|i| *i == Item::Extender)
    }

    /// All held items, in wire order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Everything the engine reports about the agent in one snapshot.
///
/// Owned by the boundary; the planner receives a fresh copy each turn and
/// must not assume any field persists beyond it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentState {
    /// Current cell position.
    pub position: Point,
    /// Current facing.
    pub heading: Heading,
    /// Held items.
    pub inventory: Inventory,
    /// Relative offsets of already-attached manipulators.
    pub manipulators: Vec<Offset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extender_token_is_recognized() {
        let inv = Inventory::from_tokens(["F", "B"]);
        assert!(inv.has_extender());
        assert_eq!(inv.items().len(), 2);
        assert_eq!(inv.items()[0], Item::Other("F".to_string()));
    }

    #[test]
    fn empty_inventory_has_no_extender() {
        assert!(!Inventory::default().has_extender());
        assert!(!Inventory::from_tokens(["L", "F"]).has_extender());
    }

    #[test]
    fn tokens_round_trip() {
        for token in ["B", "F", "L"] {
            assert_eq!(Item::from_token(token).token(), token);
        }
    }
}
