//! Errors for converting raw instruction tags.

use thiserror::Error;

/// Errors that occur when turning raw bytes into instruction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Tag byte does not name any instruction kind.
    #[error("illegal instruction kind: {0:#04x}")]
    IllegalKind(u8),
}
