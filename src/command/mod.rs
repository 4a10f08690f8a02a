//! Hero commands and action codes
//!
//! A policy answers every turn with a `Decision`: the command the hero sends
//! plus a numeric action code the turn loop uses for mana accounting.

use serde::{Deserialize, Serialize};

use crate::core::types::EntityId;
use crate::spatial::{Position, RawCoords};

/// One command for one hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Move {
        target: RawCoords,
        note: Option<String>,
    },
    Wait {
        note: Option<String>,
    },
    /// Area knock-back: pushes everything near the caster toward `direction`
    Wind {
        direction: RawCoords,
        note: Option<String>,
    },
    Shield {
        target: EntityId,
        note: Option<String>,
    },
    /// Redirect one entity toward `direction`
    Control {
        target: EntityId,
        direction: RawCoords,
        note: Option<String>,
    },
}

impl Command {
    pub fn move_to(position: &Position) -> Self {
        Command::Move {
            target: position.raw(),
            note: None,
        }
    }

    pub fn wait() -> Self {
        Command::Wait { note: None }
    }

    pub fn wind(direction: &Position) -> Self {
        Command::Wind {
            direction: direction.raw(),
            note: None,
        }
    }

    pub fn shield(target: EntityId) -> Self {
        Command::Shield { target, note: None }
    }

    pub fn control(target: EntityId, direction: &Position) -> Self {
        Command::Control {
            target,
            direction: direction.raw(),
            note: None,
        }
    }

    /// Attach a note shown next to the hero
    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        let slot = match &mut self {
            Command::Move { note, .. }
            | Command::Wait { note }
            | Command::Wind { note, .. }
            | Command::Shield { note, .. }
            | Command::Control { note, .. } => note,
        };
        *slot = Some(text.into());
        self
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Command::Move { note, .. }
            | Command::Wait { note }
            | Command::Wind { note, .. }
            | Command::Shield { note, .. }
            | Command::Control { note, .. } => note.as_deref(),
        }
    }
}

/// What a hero did this turn
///
/// Codes 2 and 3 are the spells that draw from the shared mana pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActionCode {
    /// Patrol or plain movement
    Move = 0,
    /// Closing in on a focus target
    Approach = 1,
    /// Area knock-back, or the attacker's redirect
    Spell = 2,
    /// Single-target redirect by a defender
    Banish = 3,
    Shield = 4,
}

impl ActionCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn costs_mana(self) -> bool {
        matches!(self, ActionCode::Spell | ActionCode::Banish)
    }
}

/// A policy's answer for one hero and one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub command: Command,
    pub code: ActionCode,
}

impl Decision {
    pub fn new(command: Command, code: ActionCode) -> Self {
        Self { command, code }
    }
}
