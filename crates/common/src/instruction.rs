//! A single BM instruction: a kind tag paired with a word operand.

use std::fmt;

use crate::kind::InstKind;
use crate::Word;

/// One unit of executable behavior.
///
/// `operand` is only meaningful for [`InstKind::Push`] (and
/// [`InstKind::Jump`], which the machine does not execute). The
/// constructors for the other kinds leave it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The operation to perform.
    pub kind: InstKind,
    /// Immediate value for kinds that take one.
    pub operand: Word,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(kind: InstKind, operand: Word) -> Self {
        Self { kind, operand }
    }

    /// Push `value` onto the stack.
    pub fn push(value: Word) -> Self {
        Self::new(InstKind::Push, value)
    }

    /// Add the top two values.
    pub fn add() -> Self {
        Self::new(InstKind::Add, 0)
    }

    /// Subtract the top value from the one below it.
    pub fn sub() -> Self {
        Self::new(InstKind::Sub, 0)
    }

    /// Multiply the top two values.
    pub fn mul() -> Self {
        Self::new(InstKind::Mul, 0)
    }

    /// Divide the second value by the top value.
    pub fn div() -> Self {
        Self::new(InstKind::Div, 0)
    }

    /// Jump to `target`. Not executed by the machine.
    pub fn jump(target: Word) -> Self {
        Self::new(InstKind::Jump, target)
    }

    /// Stop execution.
    pub fn halt() -> Self {
        Self::new(InstKind::Halt, 0)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_operand() {
            write!(f, "{} {}", self.kind.name(), self.operand)
        } else {
            f.write_str(self.kind.name())
        }
    }
}
