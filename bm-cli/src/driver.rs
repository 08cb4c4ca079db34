//! The fetch-execute driver loop with trace output.

use std::io::Write;

use bm_common::Program;
use bm_vm::{Machine, RuntimeError};

use crate::error::DriveError;

/// What the driver writes to the trace sink while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Write each instruction's kind name before executing it.
    pub trace_instructions: bool,
    /// Dump the stack after each successful instruction.
    pub trace_dumps: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            trace_instructions: true,
            trace_dumps: true,
        }
    }
}

/// Run `program` on a fresh machine until HALT.
///
/// The initial and final states are always dumped to `out`. On a runtime
/// error, `ERROR: <message>` and a dump of the faulted machine go to `err`
/// and the error is returned; nothing further is executed.
pub fn drive<O, E>(
    program: &Program,
    config: DriverConfig,
    out: &mut O,
    err: &mut E,
) -> Result<Machine, DriveError>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut machine = Machine::new();
    log::debug!("driving program of {} instructions", program.len());

    machine.dump(out)?;
    while !machine.is_halted() {
        let result = match machine.fetch(program) {
            Ok(instr) => {
                if config.trace_instructions {
                    writeln!(out, "{}", instr.kind.name())?;
                }
                machine.execute(&instr)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            // The runtime error wins over a failure to report it.
            if let Err(io_err) = report_fault(&machine, e, err) {
                log::warn!("cannot write error report: {io_err}");
            }
            return Err(e.into());
        }

        machine.advance();
        if config.trace_dumps {
            machine.dump(out)?;
        }
    }
    machine.dump(out)?;
    out.flush()?;

    Ok(machine)
}

fn report_fault<E: Write + ?Sized>(
    machine: &Machine,
    fault: RuntimeError,
    err: &mut E,
) -> std::io::Result<()> {
    writeln!(err, "ERROR: {fault}")?;
    machine.dump(err)?;
    err.flush()
}
