//! Typed per-turn grid view for the Mantle planner.
//!
//! The [`Grid`] is a pure, read-only view over one state snapshot's map.
//! It answers the planner's three questions (what is this cell, can the
//! agent stand on it, which neighbours can it step to) and nothing else.
//! Because wrapped tiles change the map every turn, a `Grid` is rebuilt
//! from each snapshot and never cached across turns.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::CellState;
pub use error::GridError;
pub use grid::Grid;
