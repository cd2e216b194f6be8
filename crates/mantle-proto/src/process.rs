//! Engine child-process management.

use std::ffi::OsStr;
use std::io::BufReader;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use log::debug;
use mantle_core::{Action, Point};

use crate::error::{BoundaryError, OracleError};
use crate::oracle::PathOracle;
use crate::session::{Boundary, JsonBoundary};
use crate::snapshot::Snapshot;

/// An engine spawned as a child process with a [`JsonBoundary`] over its
/// standard streams.
///
/// The child is killed on drop if it has not already exited, so an
/// abandoned run does not leave an engine behind.
#[derive(Debug)]
pub struct EngineProcess {
    child: Child,
    boundary: JsonBoundary<BufReader<ChildStdout>, ChildStdin>,
}

impl EngineProcess {
    /// Spawn `program` with `args`, piping its stdin and stdout.
    pub fn spawn<S, I>(program: S, args: I) -> Result<Self, BoundaryError>
    where
        S: AsRef<OsStr>,
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let mut child = Command::new(&program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()?;
        let stdin = child.stdin.take().ok_or(BoundaryError::Malformed {
            detail: "child stdin not captured".to_string(),
        })?;
        let stdout = child.stdout.take().ok_or(BoundaryError::Malformed {
            detail: "child stdout not captured".to_string(),
        })?;
        debug!("spawned engine {:?}", program.as_ref());
        Ok(Self {
            child,
            boundary: JsonBoundary::new(BufReader::new(stdout), stdin),
        })
    }

    /// Send the task payload and read the acknowledgement.
    pub fn initialize(&mut self, task_json: &str) -> Result<(), BoundaryError> {
        self.boundary.initialize(task_json)
    }
}

impl Boundary for EngineProcess {
    fn submit(&mut self, action: &Action) -> Result<Snapshot, BoundaryError> {
        self.boundary.submit(action)
    }

    fn state(&mut self) -> Result<Snapshot, BoundaryError> {
        self.boundary.state()
    }

    fn exit(&mut self) -> Result<(), BoundaryError> {
        self.boundary.exit()
    }
}

impl PathOracle for EngineProcess {
    fn request_path(&mut self, target: Point) -> Result<Vec<Action>, OracleError> {
        self.boundary.request_path(target)
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        // Best effort; the engine may already have exited on its own.
        if matches!(self.child.try_wait(), Ok(None)) {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
