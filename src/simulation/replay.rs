//! Offline replay of recorded snapshots
//!
//! A replay file holds the handshake base position and the snapshots of a
//! match, so decisions can be reproduced outside the arena with a fixed seed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::command::{ActionCode, Command};
use crate::core::config::WardenConfig;
use crate::core::error::Result;
use crate::core::types::{Mana, Turn};
use crate::simulation::snapshot::TurnSnapshot;
use crate::simulation::turn::MatchState;
use crate::spatial::{Position, RawCoords};

/// Recorded match input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayFile {
    pub base: RawCoords,
    pub turns: Vec<TurnSnapshot>,
}

impl ReplayFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Decisions of one replayed turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: Turn,
    pub mana_spent: Mana,
    pub codes: Vec<ActionCode>,
    pub commands: Vec<Command>,
}

/// Run every recorded turn through a fresh match
pub fn run_replay(replay: &ReplayFile, config: WardenConfig) -> Vec<TurnReport> {
    let mut state = MatchState::new(Position::from_raw(replay.base), config);

    replay
        .turns
        .iter()
        .map(|snapshot| {
            let outcome = state.play_turn(snapshot);
            TurnReport {
                turn: outcome.turn,
                mana_spent: outcome.mana_spent,
                codes: outcome.codes(),
                commands: outcome.commands(),
            }
        })
        .collect()
}
