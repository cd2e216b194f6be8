//! The read-only grid view and its queries.

use crate::cell::CellState;
use crate::error::GridError;
use mantle_core::{Heading, Point};
use smallvec::SmallVec;

/// A rectangular, read-only view over one turn's map snapshot.
///
/// Cells are stored column-major (`columns[x][y]`), matching the engine's
/// wire layout: `x` selects a column west-to-east, `y` a cell within it
/// south-to-north. All queries are pure; the grid is dropped and rebuilt
/// when the next snapshot arrives.
///
/// # Examples
///
/// ```
/// use mantle_core::Point;
/// use mantle_grid::{CellState, Grid};
///
/// let grid = Grid::from_columns(vec![
///     vec![CellState::Wall, CellState::Unwrapped],
///     vec![CellState::Wrapped, CellState::Obstacle],
/// ]).unwrap();
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 2);
/// assert_eq!(grid.cell_state(Point::new(0, 1)), CellState::Unwrapped);
/// assert_eq!(grid.cell_state(Point::new(5, 5)), CellState::OutOfBounds);
/// assert!(grid.is_traversable(Point::new(1, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Vec<CellState>>,
    height: usize,
}

impl Grid {
    /// Build a grid from column-major cell data.
    ///
    /// Returns `Err(GridError::Empty)` for a zero-cell map,
    /// `Err(GridError::NonRectangular)` when column heights disagree, and
    /// `Err(GridError::StoredOutOfBounds)` if a caller tries to store the
    /// query-only [`CellState::OutOfBounds`] value.
    pub fn from_columns(columns: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let height = columns.first().map_or(0, Vec::len);
        if height == 0 {
            return Err(GridError::Empty);
        }
        for (x, column) in columns.iter().enumerate() {
            if column.len() != height {
                return Err(GridError::NonRectangular {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, cell) in column.iter().enumerate() {
                if *cell == CellState::OutOfBounds {
                    return Err(GridError::StoredOutOfBounds { column: x, row: y });
                }
            }
        }
        Ok(Self { columns, height })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of cells per column.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The state of the cell at `p`, or [`CellState::OutOfBounds`] when
    /// `p` is off the map.
    pub fn cell_state(&self, p: Point) -> CellState {
        let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) else {
            return CellState::OutOfBounds;
        };
        match self.columns.get(x).and_then(|col| col.get(y)) {
            Some(cell) => *cell,
            None => CellState::OutOfBounds,
        }
    }

    /// Whether the agent may occupy `p`: in bounds and not Wall/Obstacle.
    pub fn is_traversable(&self, p: Point) -> bool {
        self.cell_state(p).is_traversable()
    }

    /// The traversable cardinal neighbours of `p`, in east, north, west,
    /// south order.
    pub fn traversable_neighbours(&self, p: Point) -> SmallVec<[Point; 4]> {
        const SCAN: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];
        let mut result = SmallVec::new();
        for h in SCAN {
            let n = p + h.delta();
            if self.is_traversable(n) {
                result.push(n);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Build a grid from rows written top-down, the way a map reads.
    fn grid(rows: &[&str]) -> Grid {
        let height = rows.len();
        let width = rows[0].len();
        let mut columns = vec![vec![CellState::Wall; height]; width];
        for (i, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                columns[x][height - 1 - i] = CellState::from_char(c).unwrap();
            }
        }
        Grid::from_columns(columns).unwrap()
    }

    #[test]
    fn cell_state_reads_column_major() {
        let g = grid(&[
            "-O", //
            "W+",
        ]);
        assert_eq!(g.cell_state(Point::new(0, 0)), CellState::Wall);
        assert_eq!(g.cell_state(Point::new(1, 0)), CellState::Wrapped);
        assert_eq!(g.cell_state(Point::new(0, 1)), CellState::Unwrapped);
        assert_eq!(g.cell_state(Point::new(1, 1)), CellState::Obstacle);
    }

    #[test]
    fn out_of_bounds_on_all_sides() {
        let g = grid(&["--", "--"]);
        for p in [
            Point::new(-1, 0),
            Point::new(0, -1),
            Point::new(2, 0),
            Point::new(0, 2),
        ] {
            assert_eq!(g.cell_state(p), CellState::OutOfBounds);
            assert!(!g.is_traversable(p));
        }
    }

    #[test]
    fn neighbours_interior_in_scan_order() {
        let g = grid(&["---", "---", "---"]);
        let n = g.traversable_neighbours(Point::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[
                Point::new(2, 1), // east
                Point::new(1, 2), // north
                Point::new(0, 1), // west
                Point::new(1, 0), // south
            ]
        );
    }

    #[test]
    fn neighbours_skip_walls_and_obstacles() {
        let g = grid(&[
            "W-W", //
            "O--",
            "W-W",
        ]);
        let n = g.traversable_neighbours(Point::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[Point::new(2, 1), Point::new(1, 2), Point::new(1, 0)]
        );
    }

    #[test]
    fn neighbours_at_corner() {
        let g = grid(&["--", "--"]);
        let n = g.traversable_neighbours(Point::new(0, 0));
        assert_eq!(n.as_slice(), &[Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn empty_map_rejected() {
        assert_eq!(Grid::from_columns(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::from_columns(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn ragged_map_rejected() {
        let result = Grid::from_columns(vec![
            vec![CellState::Unwrapped, CellState::Unwrapped],
            vec![CellState::Unwrapped],
        ]);
        assert_eq!(
            result,
            Err(GridError::NonRectangular {
                column: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn stored_out_of_bounds_rejected() {
        let result = Grid::from_columns(vec![vec![CellState::OutOfBounds]]);
        assert_eq!(
            result,
            Err(GridError::StoredOutOfBounds { column: 0, row: 0 })
        );
    }

    proptest! {
        #[test]
        fn neighbour_relation_is_symmetric(
            width in 2usize..8,
            height in 2usize..8,
            walls in prop::collection::vec(any::<bool>(), 64),
            px in 0i32..8, py in 0i32..8,
        ) {
            let columns: Vec<Vec<CellState>> = (0..width)
                .map(|x| {
                    (0..height)
                        .map(|y| {
                            if walls[(x * height + y) % walls.len()] {
                                CellState::Wall
                            } else {
                                CellState::Unwrapped
                            }
                        })
                        .collect()
                })
                .collect();
            let g = Grid::from_columns(columns).unwrap();
            let p = Point::new(px % width as i32, py % height as i32);
            for n in g.traversable_neighbours(p) {
                if g.is_traversable(p) {
                    prop_assert!(
                        g.traversable_neighbours(n).contains(&p),
                        "asymmetric neighbours: {p} -> {n}",
                    );
                }
            }
        }
    }
}
