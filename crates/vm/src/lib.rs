//! BM virtual machine — executes in-memory instruction streams.
//!
//! The VM is a stack machine with:
//! - A fixed-capacity operand stack of 64-bit words
//! - An instruction pointer into a caller-supplied [`Program`]
//! - A halted flag set by HALT
//!
//! # Usage
//!
//! ```
//! use bm_common::{Instruction, Program};
//! use bm_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::push(6),
//!     Instruction::push(7),
//!     Instruction::mul(),
//!     Instruction::halt(),
//! ]);
//!
//! let machine = run(&program).unwrap();
//! assert_eq!(machine.stack(), &[42]);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{Machine, MachineState, STACK_CAPACITY};

use bm_common::Program;

/// Execute a program on a fresh machine until HALT.
///
/// # Errors
///
/// Returns the first [`RuntimeError`] raised (overflow, underflow, division
/// by zero, an illegal instruction, or running off the end of the program).
pub fn run(program: &Program) -> Result<Machine, RuntimeError> {
    let mut machine = Machine::new();
    machine.run(program)?;
    Ok(machine)
}
