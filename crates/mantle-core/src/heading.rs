//! Agent orientation and single-step rotations.

use std::fmt;

use crate::point::Offset;

/// One of the four cardinal headings the agent can face.
///
/// # Examples
///
/// ```
/// use mantle_core::{Heading, Rotation};
///
/// assert_eq!(Heading::North.cw(), Heading::East);
/// assert_eq!(Heading::North.rotation_toward(Heading::West),
///            Some(Rotation::CounterClockwise));
/// assert_eq!(Heading::East.rotation_toward(Heading::East), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Facing up the grid (`y` increasing).
    North,
    /// Facing right (`x` increasing).
    East,
    /// Facing down the grid (`y` decreasing).
    South,
    /// Facing left (`x` decreasing).
    West,
}

impl Heading {
    /// The heading after one 90° clockwise rotation.
    pub fn cw(self) -> Heading {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The heading after one 90° counter-clockwise rotation.
    pub fn ccw(self) -> Heading {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// The 180°-opposite heading.
    pub fn opposite(self) -> Heading {
        self.cw().cw()
    }

    /// The unit offset one step in this direction.
    pub fn delta(self) -> Offset {
        match self {
            Self::North => Offset::new(0, 1),
            Self::East => Offset::new(1, 0),
            Self::South => Offset::new(0, -1),
            Self::West => Offset::new(-1, 0),
        }
    }

    /// The heading whose axis dominates `delta`.
    ///
    /// The axis with the larger absolute component wins; equal magnitudes
    /// resolve to the vertical axis. A zero delta yields [`Heading::North`]
    /// by the same rule.
    pub fn toward(delta: Offset) -> Heading {
        if delta.dy.unsigned_abs() >= delta.dx.unsigned_abs() {
            if delta.dy >= 0 {
                Self::North
            } else {
                Self::South
            }
        } else if delta.dx >= 0 {
            Self::East
        } else {
            Self::West
        }
    }

    /// The single 90° rotation that brings this heading closer to `target`,
    /// or `None` when already facing it.
    ///
    /// The 180°-opposite case rotates clockwise first and therefore needs
    /// two turns to complete.
    pub fn rotation_toward(self, target: Heading) -> Option<Rotation> {
        if self == target {
            None
        } else if self.ccw() == target {
            Some(Rotation::CounterClockwise)
        } else {
            // One clockwise step away, or the opposite heading.
            Some(Rotation::Clockwise)
        }
    }

    /// The wire code for this heading (`N`, `E`, `S`, `W`).
    pub fn code(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parse a wire code produced by [`code()`](Heading::code).
    pub fn from_code(code: &str) -> Option<Heading> {
        match code {
            "N" => Some(Self::North),
            "E" => Some(Self::East),
            "S" => Some(Self::South),
            "W" => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single 90° rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Rotate 90° clockwise.
    Clockwise,
    /// Rotate 90° counter-clockwise.
    CounterClockwise,
}

impl Rotation {
    /// Apply this rotation to a heading.
    pub fn apply(self, heading: Heading) -> Heading {
        match self {
            Self::Clockwise => heading.cw(),
            Self::CounterClockwise => heading.ccw(),
        }
    }
}
