//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for entities
///
/// Ids come from the game and stay stable across turns, so they are the
/// only way one entity refers to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub i32);

impl EntityId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Turn counter (one snapshot per turn)
pub type Turn = u32;

/// Shared team mana as reported by the game
pub type Mana = i32;
