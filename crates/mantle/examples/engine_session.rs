//! Run the planner against a real engine binary.
//!
//! The task payload must already be in the engine's JSON form (task
//! loading is upstream of this crate):
//!
//! ```sh
//! RUST_LOG=info cargo run -p mantle --example engine_session -- \
//!     ./game_engine/engine.native task.json
//! ```

use std::fs;
use std::process::ExitCode;

use mantle::prelude::*;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(engine), Some(task_path)) = (args.next(), args.next()) else {
        eprintln!("usage: engine_session <engine-binary> <task-json-file>");
        return ExitCode::FAILURE;
    };

    let task_json = match fs::read_to_string(&task_path) {
        Ok(payload) => payload,
        Err(err) => {
            eprintln!("reading {task_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = (|| -> Result<RunReport, Box<dyn std::error::Error>> {
        let mut session = EngineProcess::spawn(&engine, std::iter::empty::<&str>())?;
        session.initialize(&task_json)?;
        let mut planner = Planner::new(PlannerConfig::default())?;
        Ok(run(&mut planner, &mut session)?)
    })();

    match result {
        Ok(report) => {
            println!("{}", report.transcript());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("run failed: {err}");
            ExitCode::FAILURE
        }
    }
}
