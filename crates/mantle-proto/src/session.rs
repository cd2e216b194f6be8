//! The blocking line-delimited JSON session.

use std::io::{BufRead, Write};

use log::{debug, trace};
use mantle_core::{Action, Point};

use crate::error::{BoundaryError, OracleError};
use crate::oracle::PathOracle;
use crate::snapshot::Snapshot;
use crate::wire::{RawPathReply, RawStateReply, Request};

/// The action/state side of the engine boundary.
///
/// One request yields exactly one reply; the engine guarantees pairing by
/// strict alternation, so every method here is a blocking round trip.
pub trait Boundary {
    /// Submit one action and receive the resulting snapshot.
    fn submit(&mut self, action: &Action) -> Result<Snapshot, BoundaryError>;

    /// Fetch a fresh snapshot without acting.
    fn state(&mut self) -> Result<Snapshot, BoundaryError>;

    /// Close the session. No reply is expected.
    fn exit(&mut self) -> Result<(), BoundaryError>;
}

/// A blocking JSON session over any `BufRead`/`Write` pair.
///
/// Production sessions wrap an engine child process
/// ([`EngineProcess`](crate::EngineProcess)); tests wrap byte slices and
/// `Vec<u8>` buffers.
#[derive(Debug)]
pub struct JsonBoundary<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> JsonBoundary<R, W> {
    /// Wrap an existing reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Send the pre-built task payload line and read the acknowledgement.
    ///
    /// Task *loading* (converting a problem description into this JSON
    /// payload) happens upstream; this method only performs the initial
    /// exchange the engine expects before the first turn. Fails with
    /// [`BoundaryError::TaskRejected`] if the acknowledgement carries a
    /// non-`OK` status.
    pub fn initialize(&mut self, task_json: &str) -> Result<(), BoundaryError> {
        writeln!(self.writer, "{}", task_json.trim_end())?;
        self.writer.flush()?;
        let line = self.read_line()?;
        let ack: serde_json::Value =
            serde_json::from_str(&line).map_err(|e| BoundaryError::Malformed {
                detail: format!("task acknowledgement: {e}"),
            })?;
        if let Some(status) = ack.get("status").and_then(|v| v.as_str()) {
            if status != "OK" {
                return Err(BoundaryError::TaskRejected {
                    status: status.to_string(),
                });
            }
        }
        debug!("session initialized");
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, BoundaryError> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            return Err(BoundaryError::Disconnected);
        }
        trace!("<- {}", line.trim_end());
        Ok(line)
    }

    fn round_trip(&mut self, request: &Request) -> Result<String, BoundaryError> {
        let encoded =
            serde_json::to_string(request).map_err(|e| BoundaryError::Malformed {
                detail: format!("encoding request: {e}"),
            })?;
        trace!("-> {encoded}");
        writeln!(self.writer, "{encoded}")?;
        self.writer.flush()?;
        self.read_line()
    }

    fn request_state(&mut self, request: &Request) -> Result<Snapshot, BoundaryError> {
        let line = self.round_trip(request)?;
        let raw: RawStateReply =
            serde_json::from_str(&line).map_err(|e| BoundaryError::Malformed {
                detail: format!("state reply: {e}"),
            })?;
        Snapshot::decode(raw).map_err(|e| BoundaryError::Malformed {
            detail: e.to_string(),
        })
    }
}

impl<R: BufRead, W: Write> Boundary for JsonBoundary<R, W> {
    fn submit(&mut self, action: &Action) -> Result<Snapshot, BoundaryError> {
        self.request_state(&Request::action(action))
    }

    fn state(&mut self) -> Result<Snapshot, BoundaryError> {
        self.request_state(&Request::GetState)
    }

    fn exit(&mut self) -> Result<(), BoundaryError> {
        // The engine terminates on exit without replying.
        let encoded =
            serde_json::to_string(&Request::Exit).map_err(|e| BoundaryError::Malformed {
                detail: format!("encoding request: {e}"),
            })?;
        writeln!(self.writer, "{encoded}")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> PathOracle for JsonBoundary<R, W> {
    fn request_path(&mut self, target: Point) -> Result<Vec<Action>, OracleError> {
        let unavailable = |reason: String| OracleError::Unavailable { reason };
        let line = self
            .round_trip(&Request::path_to(target))
            .map_err(|e| unavailable(e.to_string()))?;
        let raw: RawPathReply = serde_json::from_str(&line)
            .map_err(|e| unavailable(format!("path reply: {e}")))?;
        if let Some(status) = raw.status {
            if status != "OK" {
                return Err(unavailable(format!("engine status: {status}")));
            }
        }
        let mut path = Vec::with_capacity(raw.path_commands.len());
        for code in &raw.path_commands {
            let action: Action = code
                .parse()
                .map_err(|e| unavailable(format!("path command: {e}")))?;
            path.push(action);
        }
        if path.is_empty() {
            return Err(OracleError::EmptyPath { target });
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantle_core::Heading;

    const STATE: &str = concat!(
        r#"{"status":"OK","map":[["-","-"]],"unwrapped_cells":[[0,1]],"#,
        r#""bot_position":[0,0],"orientation":"N","inventory":[],"manipulators":[]}"#,
        "\n",
    );

    fn session(replies: &str) -> JsonBoundary<&[u8], Vec<u8>> {
        JsonBoundary::new(replies.as_bytes(), Vec::new())
    }

    fn written(session: &JsonBoundary<&[u8], Vec<u8>>) -> String {
        String::from_utf8(session.writer.clone()).unwrap()
    }

    #[test]
    fn submit_pairs_one_request_with_one_reply() {
        let mut s = session(STATE);
        let snap = s.submit(&Action::Move(Heading::North)).unwrap();
        assert!(snap.status.is_ok());
        assert_eq!(snap.agent.position, Point::new(0, 0));
        assert_eq!(written(&s), "{\"cmd\":\"action\",\"action\":\"W\"}\n");
    }

    #[test]
    fn state_sends_get_state() {
        let mut s = session(STATE);
        s.state().unwrap();
        assert_eq!(written(&s), "{\"cmd\":\"get_state\"}\n");
    }

    #[test]
    fn exit_writes_without_reading() {
        let mut s = session("");
        s.exit().unwrap();
        assert_eq!(written(&s), "{\"cmd\":\"exit\"}\n");
    }

    #[test]
    fn disconnect_is_reported() {
        let mut s = session("");
        let err = s.state().unwrap_err();
        assert!(matches!(err, BoundaryError::Disconnected));
    }

    #[test]
    fn malformed_reply_is_reported() {
        let mut s = session("not json\n");
        let err = s.state().unwrap_err();
        assert!(matches!(err, BoundaryError::Malformed { .. }));
    }

    #[test]
    fn path_request_decodes_actions() {
        let mut s = session("{\"status\":\"OK\",\"path_commands\":[\"W\",\"D\"]}\n");
        let path = s.request_path(Point::new(3, 4)).unwrap();
        assert_eq!(
            path,
            vec![Action::Move(Heading::North), Action::Move(Heading::East)]
        );
        assert_eq!(written(&s), "{\"cmd\":\"get_path\",\"target\":[3,4]}\n");
    }

    #[test]
    fn empty_path_is_an_error() {
        let mut s = session("{\"status\":\"OK\",\"path_commands\":[]}\n");
        let err = s.request_path(Point::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            OracleError::EmptyPath {
                target: Point { x: 1, y: 1 }
            }
        ));
    }

    #[test]
    fn path_error_status_is_unavailable() {
        let mut s = session("{\"status\":\"error: no route\",\"path_commands\":[]}\n");
        let err = s.request_path(Point::new(1, 1)).unwrap_err();
        assert!(matches!(err, OracleError::Unavailable { .. }));
    }

    #[test]
    fn bad_path_command_is_unavailable() {
        let mut s = session("{\"path_commands\":[\"Z\"]}\n");
        let err = s.request_path(Point::new(1, 1)).unwrap_err();
        assert!(matches!(err, OracleError::Unavailable { .. }));
    }

    #[test]
    fn initialize_round_trips_task_payload() {
        let mut s = session("{\"status\":\"OK\"}\n");
        s.initialize("{\"task\":1}").unwrap();
        assert_eq!(written(&s), "{\"task\":1}\n");
    }

    #[test]
    fn initialize_surfaces_task_rejection() {
        let mut s = session("{\"status\":\"error: bad task\"}\n");
        let err = s.initialize("{\"task\":1}").unwrap_err();
        assert!(matches!(err, BoundaryError::TaskRejected { .. }));
    }
}
