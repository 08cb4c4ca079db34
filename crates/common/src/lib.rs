//! BM common types.
//!
//! This crate provides the data structures shared by the machine and its
//! drivers:
//!
//! - [`Word`] — the 64-bit signed value held in every stack slot
//! - [`InstKind`] — the closed set of instruction kinds
//! - [`Instruction`] — a kind paired with a word operand
//! - [`Program`] — an ordered sequence of instructions
//! - [`DecodeError`] — errors from converting raw kind tags

pub mod error;
pub mod instruction;
pub mod kind;
pub mod program;

pub use error::DecodeError;
pub use instruction::Instruction;
pub use kind::{InstKind, ALL_KINDS};
pub use program::Program;

/// A machine word: every stack slot and operand is one of these.
pub type Word = i64;
