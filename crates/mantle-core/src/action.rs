//! Action codes exchanged with the engine.

use std::fmt;
use std::str::FromStr;

use crate::heading::{Heading, Rotation};
use crate::point::Offset;

/// One turn's worth of agent behavior, encoded for the wire.
///
/// The codes match the engine's protocol: `W`/`S`/`A`/`D` move north,
/// south, west, and east; `E`/`Q` rotate clockwise and counter-clockwise;
/// `B(dx,dy)` attaches a manipulator at a relative offset.
///
/// # Examples
///
/// ```
/// use mantle_core::{Action, Heading, Offset};
///
/// let attach = Action::Attach(Offset::new(1, -2));
/// assert_eq!(attach.to_string(), "B(1,-2)");
/// assert_eq!("W".parse::<Action>().unwrap(), Action::Move(Heading::North));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move one cell in the given direction.
    Move(Heading),
    /// Rotate the agent 90° in place.
    Rotate(Rotation),
    /// Attach a manipulator at the given relative offset.
    Attach(Offset),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(Heading::North) => write!(f, "W"),
            Self::Move(Heading::South) => write!(f, "S"),
            Self::Move(Heading::West) => write!(f, "A"),
            Self::Move(Heading::East) => write!(f, "D"),
            Self::Rotate(Rotation::Clockwise) => write!(f, "E"),
            Self::Rotate(Rotation::CounterClockwise) => write!(f, "Q"),
            Self::Attach(off) => write!(f, "B({},{})", off.dx, off.dy),
        }
    }
}

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => return Ok(Self::Move(Heading::North)),
            "S" => return Ok(Self::Move(Heading::South)),
            "A" => return Ok(Self::Move(Heading::West)),
            "D" => return Ok(Self::Move(Heading::East)),
            "E" => return Ok(Self::Rotate(Rotation::Clockwise)),
            "Q" => return Ok(Self::Rotate(Rotation::CounterClockwise)),
            _ => {}
        }
        let bad = || ActionParseError {
            code: s.to_string(),
        };
        let args = s
            .strip_prefix("B(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(bad)?;
        let (dx, dy) = args.split_once(',').ok_or_else(bad)?;
        let dx = dx.trim().parse::<i32>().map_err(|_| bad())?;
        let dy = dy.trim().parse::<i32>().map_err(|_| bad())?;
        Ok(Self::Attach(Offset::new(dx, dy)))
    }
}

/// An action code that does not match any known wire form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionParseError {
    /// The offending code, verbatim.
    pub code: String,
}

impl fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized action code {:?}", self.code)
    }
}

impl std::error::Error for ActionParseError {}
