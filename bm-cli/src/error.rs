//! Errors surfaced by the driver loop.

use std::io;

use bm_vm::RuntimeError;
use thiserror::Error;

/// Why a driven run stopped before halting cleanly.
#[derive(Debug, Error)]
pub enum DriveError {
    /// The machine faulted.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// A trace or error sink could not be written.
    #[error("cannot write trace: {0}")]
    Io(#[from] io::Error),
}

impl DriveError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriveError::Runtime(_) => 1,
            DriveError::Io(_) => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_errors_display_unchanged() {
        let err = DriveError::from(RuntimeError::DivideByZero);
        assert_eq!(err.to_string(), "divide by zero");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_errors_exit_2() {
        let err = DriveError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(err.to_string(), "cannot write trace: closed");
        assert_eq!(err.exit_code(), 2);
    }
}
