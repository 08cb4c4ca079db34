//! Instruction kinds for the BM instruction set.

use crate::error::DecodeError;

/// Identifies the operation an instruction performs.
///
/// The `#[repr(u8)]` attribute gives each variant a stable tag byte, in
/// declaration order starting at zero.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstKind {
    /// Push the operand onto the stack.
    Push = 0,
    /// Pop two values, push their sum.
    Add = 1,
    /// Pop two values, push (second_popped - first_popped).
    Sub = 2,
    /// Pop two values, push their product.
    Mul = 3,
    /// Pop two values, push the truncated quotient. Zero divisor is a runtime error.
    Div = 4,
    /// Reserved. Declared but not executed by the machine.
    Jump = 5,
    /// Stop execution.
    Halt = 6,
}

/// All instruction kinds, in tag order.
pub const ALL_KINDS: [InstKind; 7] = [
    InstKind::Push,
    InstKind::Add,
    InstKind::Sub,
    InstKind::Mul,
    InstKind::Div,
    InstKind::Jump,
    InstKind::Halt,
];

impl TryFrom<u8> for InstKind {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstKind::Push),
            1 => Ok(InstKind::Add),
            2 => Ok(InstKind::Sub),
            3 => Ok(InstKind::Mul),
            4 => Ok(InstKind::Div),
            5 => Ok(InstKind::Jump),
            6 => Ok(InstKind::Halt),
            _ => Err(DecodeError::IllegalKind(value)),
        }
    }
}

impl InstKind {
    /// Returns the display name used in execution traces.
    pub fn name(&self) -> &'static str {
        match self {
            InstKind::Push => "INST_PUSH",
            InstKind::Add => "INST_PLUS",
            InstKind::Sub => "INST_MINUS",
            InstKind::Mul => "INST_MULT",
            InstKind::Div => "INST_DIV",
            InstKind::Jump => "INST_JMP",
            InstKind::Halt => "INST_HALT",
        }
    }

    /// Whether the operand field carries meaning for this kind.
    pub fn has_operand(&self) -> bool {
        matches!(self, InstKind::Push | InstKind::Jump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_count() {
        assert_eq!(ALL_KINDS.len(), 7);
    }

    #[test]
    fn tags_follow_declaration_order() {
        for (i, &kind) in ALL_KINDS.iter().enumerate() {
            assert_eq!(kind as u8, i as u8, "unexpected tag for {kind:?}");
            assert_eq!(InstKind::try_from(i as u8), Ok(kind));
        }
    }

    #[test]
    fn bytes_past_halt_are_illegal() {
        for byte in 7..=255u8 {
            assert_eq!(
                InstKind::try_from(byte),
                Err(DecodeError::IllegalKind(byte)),
                "byte {byte:#04x} should be illegal"
            );
        }
    }

    #[test]
    fn names() {
        assert_eq!(InstKind::Push.name(), "INST_PUSH");
        assert_eq!(InstKind::Add.name(), "INST_PLUS");
        assert_eq!(InstKind::Sub.name(), "INST_MINUS");
        assert_eq!(InstKind::Mul.name(), "INST_MULT");
        assert_eq!(InstKind::Div.name(), "INST_DIV");
        assert_eq!(InstKind::Jump.name(), "INST_JMP");
        assert_eq!(InstKind::Halt.name(), "INST_HALT");
    }

    #[test]
    fn only_push_and_jump_take_operands() {
        let with_operand: Vec<_> = ALL_KINDS.iter().filter(|k| k.has_operand()).collect();
        assert_eq!(with_operand, vec![&InstKind::Push, &InstKind::Jump]);
    }
}
