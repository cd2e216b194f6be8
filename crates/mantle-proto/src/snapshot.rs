//! The typed per-turn snapshot assembled from a raw state reply.

use std::fmt;

use mantle_core::{AgentState, Heading, Inventory, Offset, Point};
use mantle_grid::{CellState, Grid};

use crate::error::DecodeError;
use crate::wire::RawStateReply;

/// Outcome of the previous request, as reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// The request was applied.
    Ok,
    /// The engine rejected the request; the string is its error text.
    Error(String),
}

impl Status {
    /// Classify a wire status string (`"OK"` means success).
    pub fn from_wire(status: &str) -> Status {
        if status == "OK" {
            Self::Ok
        } else {
            Self::Error(status.to_string())
        }
    }

    /// Whether the previous request was applied.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error(text) => write!(f, "{text}"),
        }
    }
}

/// One turn's complete world view.
///
/// Everything here is rebuilt from a single reply line. The unwrapped
/// list is authoritative and keeps wire order; the planner derives its
/// own per-turn view from it but never carries one across turns.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Outcome of the request that produced this snapshot.
    pub status: Status,
    /// The map as of this turn.
    pub grid: Grid,
    /// Positions still requiring coverage, in wire order.
    pub unwrapped: Vec<Point>,
    /// The agent as of this turn.
    pub agent: AgentState,
}

impl Snapshot {
    /// Convert a decoded reply into the typed snapshot.
    ///
    /// Fails with a [`DecodeError`] naming the offending field when the
    /// reply is missing required data or carries unknown codes.
    pub fn decode(raw: RawStateReply) -> Result<Self, DecodeError> {
        let status = Status::from_wire(&raw.status);

        if raw.map.is_empty() {
            return Err(DecodeError::MissingField { field: "map" });
        }
        let mut columns = Vec::with_capacity(raw.map.len());
        for (x, raw_column) in raw.map.iter().enumerate() {
            let mut column = Vec::with_capacity(raw_column.len());
            for (y, code) in raw_column.iter().enumerate() {
                let mut chars = code.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(c), None) => CellState::from_char(c),
                    _ => None,
                };
                let cell = cell.ok_or_else(|| DecodeError::BadCell {
                    column: x,
                    row: y,
                    code: code.clone(),
                })?;
                column.push(cell);
            }
            columns.push(column);
        }
        let grid = Grid::from_columns(columns)?;

        let [x, y] = raw
            .bot_position
            .ok_or(DecodeError::MissingField {
                field: "bot_position",
            })?;
        let orientation = raw.orientation.as_deref().ok_or(DecodeError::MissingField {
            field: "orientation",
        })?;
        let heading = Heading::from_code(orientation).ok_or_else(|| {
            DecodeError::BadOrientation {
                code: orientation.to_string(),
            }
        })?;

        Ok(Self {
            status,
            grid,
            unwrapped: raw
                .unwrapped_cells
                .iter()
                .map(|&[cx, cy]| Point::new(cx, cy))
                .collect(),
            agent: AgentState {
                position: Point::new(x, y),
                heading,
                inventory: Inventory::from_tokens(raw.inventory.iter().map(String::as_str)),
                manipulators: raw
                    .manipulators
                    .iter()
                    .map(|&[dx, dy]| Offset::new(dx, dy))
                    .collect(),
            },
        })
    }
}
