//! Drive the planner across a small map with the in-memory simulator.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p mantle-planner --example corridor
//! ```

use mantle_core::{Heading, Point};
use mantle_planner::{run, Planner, PlannerConfig};
use mantle_test_utils::GridSim;

fn main() {
    env_logger::init();

    let mut sim = GridSim::new(
        &[
            "----------", //
            "-WWWW-----",
            "----------",
        ],
        Point::new(0, 0),
        Heading::East,
    );
    sim.give_extender();

    let mut planner = Planner::new(PlannerConfig::default()).expect("valid config");
    match run(&mut planner, &mut sim) {
        Ok(report) => {
            println!("{}", report.transcript());
            eprintln!(
                "wrapped in {} turns ({} moves, {} rotations, {} attachments, {} replans)",
                report.turns,
                report.moves,
                report.rotations,
                report.attachments,
                report.planner.replans,
            );
        }
        Err(err) => {
            eprintln!("run failed: {err}");
            std::process::exit(1);
        }
    }
}
