//! What a hero policy gets to see when it decides

use crate::ai::targeting::{FocusClaims, TargetPool};
use crate::core::config::WardenConfig;
use crate::core::types::Mana;
use crate::entity::{Base, Entity};
use crate::spatial::{CampBand, Position};

/// Read-only view of the turn for one hero's decision
///
/// `mana` already reflects spells cast by heroes earlier in the turn.
pub struct DecisionContext<'a> {
    pub own_base: &'a Base,
    pub opponent_base: &'a Base,
    pub mana: Mana,
    pub targets: &'a TargetPool,
    pub claims: &'a FocusClaims,
    pub config: &'a WardenConfig,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        own_base: &'a Base,
        opponent_base: &'a Base,
        mana: Mana,
        targets: &'a TargetPool,
        claims: &'a FocusClaims,
        config: &'a WardenConfig,
    ) -> Self {
        Self {
            own_base,
            opponent_base,
            mana,
            targets,
            claims,
            config,
        }
    }

    /// Enough mana for any spell
    pub fn can_cast(&self) -> bool {
        self.mana > self.config.spells.min_mana
    }

    /// Band of a point relative to the own base
    pub fn band_of(&self, point: &Position) -> CampBand {
        self.own_base.band_of(point, &self.config.camp)
    }

    /// Band of an entity relative to the own base
    pub fn band(&self, entity: &Entity) -> CampBand {
        self.band_of(&entity.position)
    }
}
