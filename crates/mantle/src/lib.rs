//! Mantle: a grid-wrapping traversal planner for engine-driven coverage
//! games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Mantle sub-crates. For most users, adding `mantle` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mantle::prelude::*;
//! use mantle_test_utils::GridSim;
//!
//! // A 1x4 corridor with one cell left to wrap at the far end.
//! let mut sim = GridSim::new(&["+++-"], Point::new(0, 0), Heading::East);
//!
//! let mut planner = Planner::new(PlannerConfig::default()).unwrap();
//! let report = run(&mut planner, &mut sim).unwrap();
//!
//! assert_eq!(report.transcript(), "DDD");
//! ```
//!
//! Against a real engine, replace the simulator with an
//! [`proto::EngineProcess`] spawned over the engine binary and
//! initialized with the task payload.
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mantle-core` | Points, offsets, headings, actions, agent state |
//! | [`grid`] | `mantle-grid` | Cell states and the per-turn grid view |
//! | [`proto`] | `mantle-proto` | Wire shapes, sessions, engine process, oracle seam |
//! | [`planner`] | `mantle-planner` | Plan cache, scheduler, planner, turn-loop driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: points, offsets, headings, actions, agent state
/// (`mantle-core`).
pub use mantle_core as types;

/// Cell states and the per-turn grid view (`mantle-grid`).
pub use mantle_grid as grid;

/// Wire shapes, the JSON session, the engine child process, and the path
/// oracle seam (`mantle-proto`).
pub use mantle_proto as proto;

/// The plan cache, manipulator scheduler, traversal planner, and
/// turn-loop driver (`mantle-planner`).
pub use mantle_planner as planner;

/// Common imports for typical Mantle usage.
///
/// ```rust
/// use mantle::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mantle_core::{Action, AgentState, Heading, Offset, Point, Rotation};

    // Grid
    pub use mantle_grid::{CellState, Grid};

    // Protocol
    pub use mantle_proto::{
        Boundary, BoundaryError, EngineProcess, JsonBoundary, OracleError, PathOracle, Snapshot,
        Status,
    };

    // Planner and driver
    pub use mantle_planner::{
        run, Decision, Planner, PlannerConfig, PlannerMetrics, RunError, RunReport,
    };
}
