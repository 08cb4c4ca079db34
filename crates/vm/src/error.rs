//! Runtime errors for the BM machine.
//!
//! Every error is fatal to the current run. None of the instruction errors
//! carry context; the machine state at the point of failure is available
//! through a dump.

use bm_common::DecodeError;
use thiserror::Error;

/// Errors that occur while fetching or executing an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// PUSH with the stack already at capacity.
    #[error("stack overflow")]
    StackOverflow,

    /// Arithmetic with fewer than two values on the stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// DIV with a zero divisor on top of the stack.
    #[error("divide by zero")]
    DivideByZero,

    /// Instruction kind the machine does not execute.
    #[error("illegal instruction")]
    IllegalInstruction,

    /// Fetch with the instruction pointer at or past the end of the program.
    #[error("instruction pointer {ip} out of bounds (program length {len})")]
    InstructionPointerOutOfBounds { ip: usize, len: usize },
}

/// A raw tag that names no instruction kind is an illegal instruction.
impl From<DecodeError> for RuntimeError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::IllegalKind(_) => RuntimeError::IllegalInstruction,
        }
    }
}
