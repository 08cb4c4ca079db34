//! Machine state: the fixed-capacity stack, instruction pointer, and run state.

use std::fmt;
use std::io;

use crate::error::RuntimeError;
use bm_common::Word;

/// Number of words the stack can hold. Pushing past this is a runtime error.
pub const STACK_CAPACITY: usize = 1024;

/// Where a machine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// Accepting instructions.
    Running,
    /// A HALT instruction has executed.
    Halted,
    /// An instruction failed. The machine must not be driven further.
    Faulted(RuntimeError),
}

/// The BM stack machine.
///
/// The stack storage is allocated once at initialization and never grows;
/// only the first `size` slots are live.
pub struct Machine {
    /// Backing storage, always `STACK_CAPACITY` words long.
    pub(crate) stack: Box<[Word]>,
    /// Count of live stack elements.
    pub(crate) size: usize,
    /// Index of the next instruction to fetch.
    pub(crate) ip: usize,
    pub(crate) halted: bool,
    /// First error raised since initialization, if any.
    pub(crate) fault: Option<RuntimeError>,
}

impl Machine {
    /// Create a machine with an empty stack, instruction pointer at zero.
    pub fn new() -> Self {
        Self {
            stack: vec![0; STACK_CAPACITY].into_boxed_slice(),
            size: 0,
            ip: 0,
            halted: false,
            fault: None,
        }
    }

    /// Re-initialize in place, returning to the running state.
    ///
    /// Stale words past the live region are left in storage; they are never
    /// observable because every read goes through `size`.
    pub fn reset(&mut self) {
        log::debug!("reset machine");
        self.size = 0;
        self.ip = 0;
        self.halted = false;
        self.fault = None;
    }

    /// Live stack contents, bottom to top.
    pub fn stack(&self) -> &[Word] {
        &self.stack[..self.size]
    }

    /// Number of live stack elements.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.stack.len()
    }

    /// Top of the stack, if any.
    pub fn peek(&self) -> Option<Word> {
        self.stack().last().copied()
    }

    pub fn instruction_pointer(&self) -> usize {
        self.ip
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The error that faulted this machine, if any.
    pub fn fault(&self) -> Option<RuntimeError> {
        self.fault
    }

    pub fn state(&self) -> MachineState {
        match (self.fault, self.halted) {
            (Some(err), _) => MachineState::Faulted(err),
            (None, true) => MachineState::Halted,
            (None, false) => MachineState::Running,
        }
    }

    /// Write a snapshot of the stack to `sink`.
    ///
    /// The machine itself is never modified; the only possible error is the
    /// sink's own.
    pub fn dump<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }

    /// Push a value, checking for overflow.
    pub(crate) fn push(&mut self, value: Word) -> Result<(), RuntimeError> {
        if self.size >= self.capacity() {
            return Err(RuntimeError::StackOverflow);
        }
        self.stack[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// The two topmost values `(a, b)` with `b` on top, without removing them.
    pub(crate) fn top_pair(&self) -> Result<(Word, Word), RuntimeError> {
        if self.size < 2 {
            return Err(RuntimeError::StackUnderflow);
        }
        Ok((self.stack[self.size - 2], self.stack[self.size - 1]))
    }

    /// Replace the two topmost values with `value`.
    ///
    /// Callers must have checked `top_pair` first.
    pub(crate) fn replace_pair(&mut self, value: Word) {
        self.stack[self.size - 2] = value;
        self.size -= 1;
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("stack", &self.stack())
            .field("ip", &self.ip)
            .field("halted", &self.halted)
            .field("fault", &self.fault)
            .finish()
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stack:")?;
        if self.size == 0 {
            return writeln!(f, "  [empty]");
        }
        for value in self.stack() {
            writeln!(f, "  {value}")?;
        }
        Ok(())
    }
}
