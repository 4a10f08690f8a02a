//! Parsed per-turn input

use serde::{Deserialize, Serialize};

use crate::core::types::Mana;
use crate::entity::{EntityRecord, EntityType};

/// Health and mana line for one base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStatus {
    pub health: i32,
    pub mana: Mana,
}

impl BaseStatus {
    pub fn new(health: i32, mana: Mana) -> Self {
        Self { health, mana }
    }
}

/// Everything the game reports at the start of a turn
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub own: BaseStatus,
    pub opponent: BaseStatus,
    pub entities: Vec<EntityRecord>,
}

impl TurnSnapshot {
    pub fn new(own: BaseStatus, opponent: BaseStatus, entities: Vec<EntityRecord>) -> Self {
        Self {
            own,
            opponent,
            entities,
        }
    }

    /// Own hero lines in snapshot order
    pub fn own_heroes(&self) -> impl Iterator<Item = &EntityRecord> {
        self.entities
            .iter()
            .filter(|record| record.kind == EntityType::OwnHero)
    }
}
