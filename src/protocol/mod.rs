//! Text protocol spoken with the arena
//!
//! This is the only fallible layer: the decision core trusts the snapshots
//! it is handed, so malformed input is rejected here.

pub mod input;
pub mod output;

pub use input::{parse_entity_line, Handshake, SnapshotReader};
pub use output::write_commands;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Input ended while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Line {line}: '{token}' is not an integer")]
    InvalidInteger { token: String, line: usize },

    #[error("Line {line}: missing field {field}")]
    MissingField { field: &'static str, line: usize },

    #[error("Line {line}: unknown entity type {tag}")]
    UnknownEntityType { tag: i32, line: usize },

    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),
}
