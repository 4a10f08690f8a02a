//! Command writer

use std::fmt;
use std::io::{self, Write};

use crate::command::Command;

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move { target, .. } => write!(f, "MOVE {} {}", target.x, target.y)?,
            Command::Wait { .. } => write!(f, "WAIT")?,
            Command::Wind { direction, .. } => {
                write!(f, "SPELL WIND {} {}", direction.x, direction.y)?
            }
            Command::Shield { target, .. } => write!(f, "SPELL SHIELD {}", target)?,
            Command::Control {
                target, direction, ..
            } => write!(f, "SPELL CONTROL {} {} {}", target, direction.x, direction.y)?,
        }
        if let Some(note) = self.note() {
            write!(f, " {}", note)?;
        }
        Ok(())
    }
}

/// Write one line per command and flush
pub fn write_commands<W: Write>(out: &mut W, commands: &[Command]) -> io::Result<()> {
    for command in commands {
        writeln!(out, "{}", command)?;
    }
    out.flush()
}
