//! BM driver — runs a program on a fresh machine and traces every step.
//!
//! The binary `bm` runs [`demo_program`] with the default
//! [`DriverConfig`]. The library half exists so the trace transcript can be
//! checked against in-memory buffers.

pub mod driver;
pub mod error;

pub use driver::{drive, DriverConfig};
pub use error::DriveError;

use bm_common::{Instruction, Program};

/// The program shipped with the driver.
///
/// Computes `((69 + 420 - 42) * 2) / 4`, leaving `223` on the stack.
pub fn demo_program() -> Program {
    Program::new(vec![
        Instruction::push(69),
        Instruction::push(420),
        Instruction::add(),
        Instruction::push(42),
        Instruction::sub(),
        Instruction::push(2),
        Instruction::mul(),
        Instruction::push(4),
        Instruction::div(),
        Instruction::halt(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use bm_common::InstKind;

    #[test]
    fn demo_program_ends_in_halt() {
        let program = demo_program();
        assert_eq!(program.len(), 10);
        assert_eq!(program.get(9).map(|i| i.kind), Some(InstKind::Halt));
    }

    #[test]
    fn demo_program_computes_223() {
        let machine = bm_vm::run(&demo_program()).unwrap();
        assert_eq!(machine.stack(), &[223]);
    }
}
