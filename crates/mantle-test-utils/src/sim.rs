//! A small in-memory engine for end-to-end planner tests.

use std::collections::VecDeque;

use mantle_core::{Action, AgentState, Heading, Inventory, Offset, Point};
use mantle_grid::{CellState, Grid};
use mantle_proto::{Boundary, BoundaryError, OracleError, PathOracle, Snapshot, Status};

use crate::fixtures::columns_from_rows;

/// An in-memory stand-in for the external engine.
///
/// Implements both the [`Boundary`] and the [`PathOracle`] traits so a
/// planner can be driven end to end without a child process. Semantics
/// are deliberately simple: moves into non-traversable cells are
/// rejected with the engine's `error: Invalid state` status, cells are
/// wrapped under the agent body and under attached manipulators (offsets
/// applied as given, without rotation), and the path oracle is a BFS
/// over traversable cells returning move actions only.
#[derive(Debug)]
pub struct GridSim {
    columns: Vec<Vec<CellState>>,
    position: Point,
    heading: Heading,
    tokens: Vec<String>,
    manipulators: Vec<Offset>,
}

impl GridSim {
    /// Build a simulator from top-down rows, wrapping the start cell.
    pub fn new(rows: &[&str], start: Point, heading: Heading) -> Self {
        let mut sim = Self {
            columns: columns_from_rows(rows),
            position: start,
            heading,
            tokens: Vec::new(),
            manipulators: Vec::new(),
        };
        assert!(
            sim.cell(start).is_traversable(),
            "start cell {start} is not traversable"
        );
        sim.wrap_current();
        sim
    }

    /// Put a manipulator extender token into the inventory.
    pub fn give_extender(&mut self) {
        self.tokens.push("B".to_string());
    }

    /// The agent's current position.
    pub fn position(&self) -> Point {
        self.position
    }

    fn width(&self) -> i32 {
        self.columns.len() as i32
    }

    fn height(&self) -> i32 {
        self.columns.first().map_or(0, |c| c.len()) as i32
    }

    fn cell(&self, p: Point) -> CellState {
        if p.x < 0 || p.y < 0 || p.x >= self.width() || p.y >= self.height() {
            return CellState::OutOfBounds;
        }
        self.columns[p.x as usize][p.y as usize]
    }

    fn wrap_cell(&mut self, p: Point) {
        if self.cell(p) == CellState::Unwrapped {
            self.columns[p.x as usize][p.y as usize] = CellState::Wrapped;
        }
    }

    fn wrap_current(&mut self) {
        self.wrap_cell(self.position);
        for offset in self.manipulators.clone() {
            self.wrap_cell(self.position + offset);
        }
    }

    fn unwrapped_cells(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        for (x, column) in self.columns.iter().enumerate() {
            for (y, cell) in column.iter().enumerate() {
                if *cell == CellState::Unwrapped {
                    cells.push(Point::new(x as i32, y as i32));
                }
            }
        }
        cells
    }

    fn snapshot(&self, status: Status) -> Snapshot {
        Snapshot {
            status,
            grid: Grid::from_columns(self.columns.clone()).expect("sim map is valid"),
            unwrapped: self.unwrapped_cells(),
            agent: AgentState {
                position: self.position,
                heading: self.heading,
                inventory: Inventory::from_tokens(self.tokens.iter().map(String::as_str)),
                manipulators: self.manipulators.clone(),
            },
        }
    }

    /// BFS over traversable cells; neighbours expanded east, north,
    /// west, south for determinism.
    fn bfs_path(&self, target: Point) -> Option<Vec<Action>> {
        const SCAN: [Heading; 4] = [Heading::East, Heading::North, Heading::West, Heading::South];
        if !self.cell(target).is_traversable() {
            return None;
        }
        let index = |p: Point| (p.x * self.height() + p.y) as usize;
        let mut came_from: Vec<Option<(Point, Heading)>> =
            vec![None; (self.width() * self.height()) as usize];
        let mut visited = vec![false; came_from.len()];
        let mut queue = VecDeque::new();
        visited[index(self.position)] = true;
        queue.push_back(self.position);
        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }
            for heading in SCAN {
                let next = current + heading.delta();
                if !self.cell(next).is_traversable() || visited[index(next)] {
                    continue;
                }
                visited[index(next)] = true;
                came_from[index(next)] = Some((current, heading));
                queue.push_back(next);
            }
        }
        if !visited[index(target)] {
            return None;
        }
        let mut path = Vec::new();
        let mut cursor = target;
        while cursor != self.position {
            let (previous, heading) = came_from[index(cursor)].expect("bfs parent chain");
            path.push(Action::Move(heading));
            cursor = previous;
        }
        path.reverse();
        Some(path)
    }
}

impl Boundary for GridSim {
    fn submit(&mut self, action: &Action) -> Result<Snapshot, BoundaryError> {
        let status = match *action {
            Action::Move(heading) => {
                let next = self.position + heading.delta();
                if self.cell(next).is_traversable() {
                    self.position = next;
                    self.wrap_current();
                    Status::Ok
                } else {
                    Status::Error("error: Invalid state".to_string())
                }
            }
            Action::Rotate(rotation) => {
                self.heading = rotation.apply(self.heading);
                self.wrap_current();
                Status::Ok
            }
            Action::Attach(offset) => {
                if let Some(slot) = self.tokens.iter().position(|t| t == "B") {
                    self.tokens.remove(slot);
                    self.manipulators.push(offset);
                    self.wrap_current();
                    Status::Ok
                } else {
                    Status::Error("error: Invalid state".to_string())
                }
            }
        };
        Ok(self.snapshot(status))
    }

    fn state(&mut self) -> Result<Snapshot, BoundaryError> {
        Ok(self.snapshot(Status::Ok))
    }

    fn exit(&mut self) -> Result<(), BoundaryError> {
        Ok(())
    }
}

impl PathOracle for GridSim {
    fn request_path(&mut self, target: Point) -> Result<Vec<Action>, OracleError> {
        let path = self.bfs_path(target).ok_or_else(|| OracleError::Unavailable {
            reason: format!("no route to {target}"),
        })?;
        if path.is_empty() {
            return Err(OracleError::EmptyPath { target });
        }
        Ok(path)
    }
}
