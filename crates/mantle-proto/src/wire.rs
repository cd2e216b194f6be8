//! Raw request and reply shapes, exactly as they appear on the wire.
//!
//! Replies are decoded into these untyped shapes first and converted to
//! the typed [`Snapshot`](crate::Snapshot) in a second step, so a decode
//! failure can name the offending field instead of surfacing as a serde
//! position error.

use mantle_core::{Action, Point};
use serde::{Deserialize, Serialize};

/// A single request line sent to the engine.
///
/// # Examples
///
/// ```
/// use mantle_core::{Action, Heading};
/// use mantle_proto::Request;
///
/// let req = Request::action(&Action::Move(Heading::North));
/// assert_eq!(serde_json::to_string(&req).unwrap(),
///            r#"{"cmd":"action","action":"W"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    /// Submit one action for this turn.
    Action {
        /// The rendered action code.
        action: String,
    },
    /// Ask the path oracle for a route to a target cell.
    GetPath {
        /// Target position as `[x, y]`.
        target: [i32; 2],
    },
    /// Fetch a fresh state snapshot without acting.
    GetState,
    /// Close the session.
    Exit,
}

impl Request {
    /// Build an action request, rendering the wire code.
    pub fn action(action: &Action) -> Request {
        Request::Action {
            action: action.to_string(),
        }
    }

    /// Build a path request for `target`.
    pub fn path_to(target: Point) -> Request {
        Request::GetPath {
            target: [target.x, target.y],
        }
    }
}

/// One state reply line, fields still untyped.
///
/// All fields except `status` default when absent so a terse error reply
/// still decodes; the typed conversion rejects missing fields it needs.
#[derive(Clone, Debug, Deserialize)]
pub struct RawStateReply {
    /// `"OK"` or an error string such as `"error: Invalid state"`.
    pub status: String,
    /// Column-major map cells as single-character strings.
    #[serde(default)]
    pub map: Vec<Vec<String>>,
    /// Positions still requiring coverage, as `[x, y]` pairs.
    #[serde(default)]
    pub unwrapped_cells: Vec<[i32; 2]>,
    /// Agent position as `[x, y]`.
    #[serde(default)]
    pub bot_position: Option<[i32; 2]>,
    /// Agent facing as `N`/`E`/`S`/`W`.
    #[serde(default)]
    pub orientation: Option<String>,
    /// Held item tokens.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Attached manipulator offsets as `[dx, dy]` pairs.
    #[serde(default)]
    pub manipulators: Vec<[i32; 2]>,
}

/// One path reply line.
#[derive(Clone, Debug, Deserialize)]
pub struct RawPathReply {
    /// `"OK"` or an error string; absent means success.
    #[serde(default)]
    pub status: Option<String>,
    /// Ordered action codes from the agent's position to the target.
    #[serde(default)]
    pub path_commands: Vec<String>,
}
