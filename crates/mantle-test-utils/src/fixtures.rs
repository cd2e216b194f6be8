//! Snapshot and grid fixtures built from ASCII maps.
//!
//! Maps are written the way they read: one string per row, top row
//! first, using the wire cell chars (`W` wall, `O` obstacle, `-`
//! unwrapped, `+` wrapped). Internally everything is converted to the
//! column-major layout the engine uses.

use mantle_core::{AgentState, Heading, Inventory, Point};
use mantle_grid::{CellState, Grid};
use mantle_proto::{Snapshot, Status};

/// Parse top-down rows into column-major cells.
pub fn columns_from_rows(rows: &[&str]) -> Vec<Vec<CellState>> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut columns = vec![vec![CellState::Wall; height]; width];
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "ragged fixture map");
        for (x, c) in row.chars().enumerate() {
            let cell = CellState::from_char(c).expect("unknown fixture cell char");
            columns[x][height - 1 - i] = cell;
        }
    }
    columns
}

/// Build a grid from top-down rows.
pub fn grid(rows: &[&str]) -> Grid {
    Grid::from_columns(columns_from_rows(rows)).expect("invalid fixture map")
}

/// Unwrapped positions of a fixture map, columns west to east, cells
/// south to north within each column.
pub fn unwrapped_cells(rows: &[&str]) -> Vec<Point> {
    let columns = columns_from_rows(rows);
    let mut cells = Vec::new();
    for (x, column) in columns.iter().enumerate() {
        for (y, cell) in column.iter().enumerate() {
            if *cell == CellState::Unwrapped {
                cells.push(Point::new(x as i32, y as i32));
            }
        }
    }
    cells
}

/// Build a full OK snapshot for a fixture map.
///
/// The unwrapped list comes from [`unwrapped_cells`]; the agent carries
/// the given inventory tokens and no attached manipulators.
pub fn snapshot(rows: &[&str], position: Point, heading: Heading, tokens: &[&str]) -> Snapshot {
    Snapshot {
        status: Status::Ok,
        grid: grid(rows),
        unwrapped: unwrapped_cells(rows),
        agent: AgentState {
            position,
            heading,
            inventory: Inventory::from_tokens(tokens.iter().copied()),
            manipulators: vec![],
        },
    }
}
