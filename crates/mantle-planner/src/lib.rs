//! Grid-wrapping traversal planner and turn-loop driver.
//!
//! Each turn the planner receives a fresh [`Snapshot`](mantle_proto::Snapshot)
//! and produces exactly one action, chosen by a fixed priority: attach a
//! pending manipulator, rotate toward an adjacent unwrapped cell, drain
//! the cached plan, or query the path oracle for a new one. The planner
//! owns nothing across turns except the plan cache and the pending
//! manipulator offsets; everything else arrives in the snapshot.
//!
//! The [`driver`] module runs a planner against a boundary session until
//! the map is fully wrapped or the engine reports a terminal failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod driver;
pub mod manipulator;
pub mod metrics;
pub mod planner;

pub use cache::PlanCache;
pub use config::{ConfigError, PlannerConfig};
pub use driver::{run, RunError, RunReport};
pub use manipulator::ManipulatorScheduler;
pub use metrics::PlannerMetrics;
pub use planner::{nearest_unwrapped, Decision, Planner};
