//! End-to-end planner runs against the in-memory simulator.

use mantle_core::{Action, Heading, Offset, Point, Rotation};
use mantle_planner::{run, Planner, PlannerConfig, RunError};
use mantle_proto::{Boundary, BoundaryError, OracleError, PathOracle, Snapshot};
use mantle_test_utils::GridSim;

fn planner() -> Planner {
    Planner::new(PlannerConfig::default()).expect("default config is valid")
}

#[test]
fn corridor_is_wrapped_with_exact_moves() {
    // A 1x4 corridor with a single unwrapped cell at the far end: the
    // planner must emit exactly the corridor distance in moves, then
    // terminate successfully.
    let mut sim = GridSim::new(&["+++-"], Point::new(0, 0), Heading::East);
    let mut p = planner();

    let report = run(&mut p, &mut sim).expect("corridor run succeeds");
    assert_eq!(report.actions, vec![Action::Move(Heading::East); 3]);
    assert_eq!(report.moves, 3);
    assert_eq!(report.rotations, 0);
    assert_eq!(report.attachments, 0);
    assert_eq!(report.transcript(), "DDD");
    assert!(p.is_terminal());
}

#[test]
fn held_extender_preempts_movement() {
    let mut sim = GridSim::new(&["+--"], Point::new(0, 0), Heading::East);
    sim.give_extender();
    let mut p = planner();

    let report = run(&mut p, &mut sim).expect("run succeeds");
    // The very first action must be the attach, ahead of any movement.
    assert_eq!(
        report.actions.first(),
        Some(&Action::Attach(Offset::new(1, 2)))
    );
    assert_eq!(report.attachments, 1);
    assert_eq!(report.moves, 2);
}

#[test]
fn two_extenders_attach_in_layout_order() {
    let mut sim = GridSim::new(&["+--"], Point::new(0, 0), Heading::East);
    sim.give_extender();
    sim.give_extender();
    let mut p = planner();

    let report = run(&mut p, &mut sim).expect("run succeeds");
    assert_eq!(
        &report.actions[..2],
        &[
            Action::Attach(Offset::new(1, 2)),
            Action::Attach(Offset::new(1, -2)),
        ]
    );
    assert_eq!(report.attachments, 2);
}

#[test]
fn rotations_interleave_with_moves() {
    // 2x2 block, three unwrapped cells, agent starting north-facing in
    // the wrapped corner. Every replanned path here has length 1, so the
    // exact action sequence is independent of the cached prefix length.
    let mut sim = GridSim::new(
        &[
            "--", //
            "+-",
        ],
        Point::new(0, 0),
        Heading::North,
    );
    let mut p = planner();

    let report = run(&mut p, &mut sim).expect("run succeeds");
    assert_eq!(
        report.actions,
        vec![
            // East neighbour (1,0) is unwrapped; facing north -> clockwise.
            Action::Rotate(Rotation::Clockwise),
            // Nearest unwrapped (tie) is (0,1): one step north.
            Action::Move(Heading::North),
            // Then (1,1), already faced.
            Action::Move(Heading::East),
            // Last cell (1,0) is the south neighbour: rotate, then move.
            Action::Rotate(Rotation::Clockwise),
            Action::Move(Heading::South),
        ]
    );
    assert_eq!(report.transcript(), "EWDES");
    assert_eq!(report.planner.replans, 3);
}

/// A session that delegates state to a [`GridSim`] but answers path
/// queries with a fixed, wrong route.
struct MisroutingSession {
    sim: GridSim,
    path: Vec<Action>,
}

impl Boundary for MisroutingSession {
    fn submit(&mut self, action: &Action) -> Result<Snapshot, BoundaryError> {
        self.sim.submit(action)
    }
    fn state(&mut self) -> Result<Snapshot, BoundaryError> {
        self.sim.state()
    }
    fn exit(&mut self) -> Result<(), BoundaryError> {
        self.sim.exit()
    }
}

impl PathOracle for MisroutingSession {
    fn request_path(&mut self, _target: Point) -> Result<Vec<Action>, OracleError> {
        Ok(self.path.clone())
    }
}

#[test]
fn rejected_action_halts_the_run() {
    // The oracle routes straight into the map edge; the engine rejects
    // the move and the run ends without retrying.
    let mut session = MisroutingSession {
        sim: GridSim::new(&["++-"], Point::new(0, 0), Heading::East),
        path: vec![Action::Move(Heading::North)],
    };
    let mut p = planner();

    let err = run(&mut p, &mut session).expect_err("run must halt");
    match err {
        RunError::ActionRejected {
            action,
            status,
            turn,
        } => {
            assert_eq!(action, Action::Move(Heading::North));
            assert_eq!(status, "error: Invalid state");
            assert_eq!(turn, 1);
        }
        other => panic!("expected ActionRejected, got {other:?}"),
    }
    assert!(p.is_terminal());
}

/// A session whose oracle is permanently down.
struct DeadOracleSession {
    sim: GridSim,
}

impl Boundary for DeadOracleSession {
    fn submit(&mut self, action: &Action) -> Result<Snapshot, BoundaryError> {
        self.sim.submit(action)
    }
    fn state(&mut self) -> Result<Snapshot, BoundaryError> {
        self.sim.state()
    }
    fn exit(&mut self) -> Result<(), BoundaryError> {
        self.sim.exit()
    }
}

impl PathOracle for DeadOracleSession {
    fn request_path(&mut self, _target: Point) -> Result<Vec<Action>, OracleError> {
        Err(OracleError::Unavailable {
            reason: "connection lost".to_string(),
        })
    }
}

#[test]
fn oracle_failure_is_fatal() {
    let mut session = DeadOracleSession {
        sim: GridSim::new(&["++-"], Point::new(0, 0), Heading::East),
    };
    let mut p = planner();

    let err = run(&mut p, &mut session).expect_err("run must fail");
    assert!(matches!(err, RunError::Oracle(OracleError::Unavailable { .. })));
}

#[test]
fn fully_wrapped_map_terminates_immediately() {
    let mut sim = GridSim::new(&["+++"], Point::new(0, 0), Heading::East);
    let mut p = planner();

    let report = run(&mut p, &mut sim).expect("run succeeds");
    assert_eq!(report.turns, 0);
    assert!(report.actions.is_empty());
}
