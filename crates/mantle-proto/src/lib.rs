//! Line-delimited JSON boundary protocol for the Mantle planner.
//!
//! The planner never owns the simulation; it talks to an external engine
//! process over a strictly alternating request/reply channel: one JSON
//! object per line, one reply per request, no pipelining. This crate
//! defines the wire shapes, the typed [`Snapshot`] assembled from each
//! state reply, the blocking [`JsonBoundary`] session, the
//! [`EngineProcess`] child wrapper, and the [`PathOracle`] seam through
//! which the planner asks the engine for routes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod oracle;
pub mod process;
pub mod session;
pub mod snapshot;
pub mod wire;

pub use error::{BoundaryError, DecodeError, OracleError};
pub use oracle::PathOracle;
pub use process::EngineProcess;
pub use session::{Boundary, JsonBoundary};
pub use snapshot::{Snapshot, Status};
pub use wire::{RawPathReply, RawStateReply, Request};
