//! BM — run the demo program and trace every step.
//!
//! Exit codes:
//! - 0: Program halted
//! - 1: Runtime error
//! - 2: Trace output could not be written

use std::io;
use std::process;

use bm_cli::{demo_program, drive, DriverConfig};

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = drive(
        &demo_program(),
        DriverConfig::default(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    match result {
        Ok(machine) => log::info!("halted with {} values on stack", machine.size()),
        Err(e) => {
            log::error!("run failed: {e}");
            process::exit(e.exit_code());
        }
    }
}
