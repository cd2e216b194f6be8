//! Cell states and their wire encoding.

use std::fmt;

/// The state of a single grid cell.
///
/// The first four variants are what the engine stores and reports (wire
/// chars `W`, `O`, `-`, `+`); [`CellState::OutOfBounds`] is a query
/// result for positions off the map and is never stored in a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Map boundary cell; never traversable, never wrapped.
    Wall,
    /// Interior obstacle; never traversable, never wrapped.
    Obstacle,
    /// Reachable cell not yet covered.
    Unwrapped,
    /// Reachable cell already covered.
    Wrapped,
    /// Position outside the map entirely.
    OutOfBounds,
}

impl CellState {
    /// Decode a wire map character.
    pub fn from_char(c: char) -> Option<CellState> {
        match c {
            'W' => Some(Self::Wall),
            'O' => Some(Self::Obstacle),
            '-' => Some(Self::Unwrapped),
            '+' => Some(Self::Wrapped),
            _ => None,
        }
    }

    /// The wire character for this state, or `None` for
    /// [`CellState::OutOfBounds`], which has no encoding.
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Wall => Some('W'),
            Self::Obstacle => Some('O'),
            Self::Unwrapped => Some('-'),
            Self::Wrapped => Some('+'),
            Self::OutOfBounds => None,
        }
    }

    /// Whether the agent may occupy this cell.
    pub fn is_traversable(self) -> bool {
        matches!(self, Self::Unwrapped | Self::Wrapped)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Spelled out rather than the wire char; `-` is unreadable in logs.
        match self {
            Self::Wall => write!(f, "wall"),
            Self::Obstacle => write!(f, "obstacle"),
            Self::Unwrapped => write!(f, "unwrapped"),
            Self::Wrapped => write!(f, "wrapped"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}
