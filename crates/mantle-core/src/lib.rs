//! Core types for the Mantle grid-wrapping planner.
//!
//! This is the leaf crate with zero third-party runtime dependencies. It
//! defines the vocabulary shared by the rest of the workspace: grid
//! positions and offsets, agent headings and rotation steps, the action
//! codes exchanged with the engine, and the per-turn agent state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod agent;
pub mod heading;
pub mod point;

pub use action::{Action, ActionParseError};
pub use agent::{AgentState, Inventory, Item};
pub use heading::{Heading, Rotation};
pub use point::{Offset, Point};
