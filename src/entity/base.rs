//! Base camps

use crate::core::config::CampConfig;
use crate::core::constants::STARTING_BASE_HEALTH;
use crate::core::types::Mana;
use crate::spatial::{CampBand, Position};

/// One side's base: fixed position, changing health and mana
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    position: Position,
    pub health: i32,
    pub mana: Mana,
}

impl Base {
    pub fn new(x: i32, y: i32) -> Self {
        Self::at(Position::new(x, y))
    }

    pub fn at(position: Position) -> Self {
        Self {
            position,
            health: STARTING_BASE_HEALTH,
            mana: 0,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The opposing base across the board center
    pub fn mirrored(&self) -> Base {
        Base::at(Position::from_internal(self.position.internal().reflected()))
    }

    /// Whether this base sits in the top-left half of the board
    pub fn is_top_left(&self) -> bool {
        let internal = self.position.internal();
        internal.x < 0 && internal.y > 0
    }

    /// Point `offset` away from the base, measured toward the board center
    pub fn anchor(&self, offset: [i32; 2]) -> Position {
        if self.is_top_left() {
            self.position.offset(offset[0], offset[1])
        } else {
            self.position.offset(-offset[0], -offset[1])
        }
    }

    /// Apply the per-turn status line
    pub fn refresh(&mut self, health: i32, mana: Mana) {
        self.health = health.max(0);
        self.mana = mana.max(0);
    }

    /// Deduct mana, never below zero
    pub fn spend(&mut self, amount: Mana) {
        self.mana = (self.mana - amount).max(0);
    }

    pub fn band_of(&self, point: &Position, camp: &CampConfig) -> CampBand {
        CampBand::of(point, &self.position, camp)
    }
}
