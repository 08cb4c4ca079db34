//! Instruction dispatch and the fetch-execute cycle.

use crate::error::RuntimeError;
use crate::machine::Machine;
use bm_common::{InstKind, Instruction, Program, Word};

impl Machine {
    /// Apply exactly one instruction.
    ///
    /// The instruction pointer is not touched. A failing instruction leaves
    /// the stack unchanged and moves the machine to the faulted state.
    pub fn execute(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        log::trace!("ip={} size={} {instr}", self.ip, self.size);

        let result = match instr.kind {
            InstKind::Push => self.push(instr.operand),
            InstKind::Add => self.exec_binary_arith(Word::wrapping_add),
            InstKind::Sub => self.exec_binary_arith(Word::wrapping_sub),
            InstKind::Mul => self.exec_binary_arith(Word::wrapping_mul),
            InstKind::Div => self.exec_div(),
            InstKind::Halt => {
                self.exec_halt();
                Ok(())
            }
            // Declared but without execution semantics.
            InstKind::Jump => Err(RuntimeError::IllegalInstruction),
        };

        if let Err(err) = result {
            self.record_fault(err);
        }
        result
    }

    /// Execute an instruction given as a raw kind tag and operand.
    ///
    /// A tag outside the instruction set fails with
    /// [`RuntimeError::IllegalInstruction`] and faults the machine.
    pub fn execute_raw(&mut self, tag: u8, operand: Word) -> Result<(), RuntimeError> {
        match InstKind::try_from(tag) {
            Ok(kind) => self.execute(&Instruction::new(kind, operand)),
            Err(err) => {
                log::trace!("ip={} size={} {err}", self.ip, self.size);
                let err = RuntimeError::from(err);
                self.record_fault(err);
                Err(err)
            }
        }
    }

    /// The instruction at the instruction pointer.
    pub fn fetch(&mut self, program: &Program) -> Result<Instruction, RuntimeError> {
        match program.get(self.ip) {
            Some(instr) => Ok(*instr),
            None => {
                let err = RuntimeError::InstructionPointerOutOfBounds {
                    ip: self.ip,
                    len: program.len(),
                };
                self.record_fault(err);
                Err(err)
            }
        }
    }

    /// Move the instruction pointer to the next instruction.
    pub fn advance(&mut self) {
        self.ip += 1;
    }

    /// Fetch and execute one instruction, advancing on success.
    ///
    /// Returns the instruction that was executed.
    pub fn step(&mut self, program: &Program) -> Result<Instruction, RuntimeError> {
        let instr = self.fetch(program)?;
        self.execute(&instr)?;
        self.advance();
        Ok(instr)
    }

    /// Step until HALT or the first error.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        while !self.halted {
            self.step(program)?;
        }
        Ok(())
    }

    fn exec_binary_arith(&mut self, op: fn(Word, Word) -> Word) -> Result<(), RuntimeError> {
        let (a, b) = self.top_pair()?;
        self.replace_pair(op(a, b));
        Ok(())
    }

    fn exec_div(&mut self) -> Result<(), RuntimeError> {
        let (a, b) = self.top_pair()?;
        if b == 0 {
            return Err(RuntimeError::DivideByZero);
        }
        // Truncates toward zero; MIN / -1 wraps to MIN.
        self.replace_pair(a.wrapping_div(b));
        Ok(())
    }

    fn exec_halt(&mut self) {
        if !self.halted {
            log::debug!("halted at ip={} with {} values", self.ip, self.size);
        }
        self.halted = true;
    }

    fn record_fault(&mut self, err: RuntimeError) {
        log::debug!("fault at ip={}: {err}", self.ip);
        self.fault.get_or_insert(err);
    }
}
