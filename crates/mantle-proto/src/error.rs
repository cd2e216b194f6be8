//! Error types for the boundary protocol.

use std::fmt;
use std::io;

use mantle_core::Point;
use mantle_grid::GridError;

/// Errors from the boundary transport and framing layer.
#[derive(Debug)]
pub enum BoundaryError {
    /// An I/O error on the underlying channel.
    Io(io::Error),
    /// A reply line could not be decoded into the expected shape.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The engine closed its end of the channel.
    Disconnected,
    /// The engine rejected the initialization task payload.
    TaskRejected {
        /// The status string the engine reported.
        status: String,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed { detail } => write!(f, "malformed reply: {detail}"),
            Self::Disconnected => write!(f, "engine closed the channel"),
            Self::TaskRejected { status } => {
                write!(f, "engine rejected task payload: {status}")
            }
        }
    }
}

impl std::error::Error for BoundaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BoundaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors converting a raw state reply into a typed snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A field the typed snapshot needs was absent.
    MissingField {
        /// Wire name of the missing field.
        field: &'static str,
    },
    /// A map entry was not a known single-character cell code.
    BadCell {
        /// Column of the offending entry.
        column: usize,
        /// Row of the offending entry.
        row: usize,
        /// The entry, verbatim.
        code: String,
    },
    /// The orientation field was not one of `N`/`E`/`S`/`W`.
    BadOrientation {
        /// The field value, verbatim.
        code: String,
    },
    /// The decoded cells did not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing field `{field}`"),
            Self::BadCell { column, row, code } => {
                write!(f, "bad cell code {code:?} at ({column},{row})")
            }
            Self::BadOrientation { code } => write!(f, "bad orientation {code:?}"),
            Self::Grid(e) => write!(f, "invalid map: {e}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DecodeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from the path oracle.
///
/// Both variants are fatal for the run: the planner propagates them
/// upward instead of retrying within the turn.
#[derive(Debug)]
pub enum OracleError {
    /// The path request failed or the boundary broke underneath it.
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The oracle answered with a zero-length command list.
    EmptyPath {
        /// The requested target.
        target: Point,
    },
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "path oracle unavailable: {reason}"),
            Self::EmptyPath { target } => {
                write!(f, "path oracle returned an empty path to {target}")
            }
        }
    }
}

impl std::error::Error for OracleError {}
