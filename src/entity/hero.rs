//! Own heroes and the focus they carry between turns

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::core::config::WardenConfig;
use crate::core::types::EntityId;
use crate::entity::{Base, Entity, EntityRecord};
use crate::spatial::Position;

/// Hero role, picked once when the hero is first seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Guards the own camp
    Defender,
    /// Roams near the opponent base and feeds it creatures
    Attacker,
}

/// One of our heroes
///
/// Created on first sighting, refreshed in place afterwards. The focus
/// target is a weak reference: only the id is kept and it is resolved
/// against the current turn's targets.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnHero {
    pub id: EntityId,
    pub role: Role,
    pub position: Position,
    pub shield_life: i32,
    pub is_controlled: bool,
    /// Set when the hero was present in the latest snapshot
    pub seen_this_turn: bool,
    focus_target: Option<EntityId>,
    focus_point: Position,
    anchor: Position,
    patrol_radius: i32,
}

impl OwnHero {
    pub fn new(record: &EntityRecord, role: Role, own_base: &Base, config: &WardenConfig) -> Self {
        let (offset, patrol_radius) = match role {
            Role::Defender => (config.defender.anchor, config.defender.patrol_radius),
            Role::Attacker => (config.attacker.anchor, config.attacker.patrol_radius),
        };
        let anchor = own_base.anchor(offset);

        Self {
            id: record.id,
            role,
            position: record.position(),
            shield_life: record.shield_life,
            is_controlled: record.is_controlled,
            seen_this_turn: true,
            focus_target: None,
            focus_point: anchor,
            anchor,
            patrol_radius,
        }
    }

    /// Apply this turn's snapshot line; focus is left alone
    pub fn refresh(&mut self, record: &EntityRecord) {
        self.position = record.position();
        self.shield_life = record.shield_life;
        self.is_controlled = record.is_controlled;
        self.seen_this_turn = true;
    }

    pub fn focus_target(&self) -> Option<EntityId> {
        self.focus_target
    }

    pub fn focus_point(&self) -> &Position {
        &self.focus_point
    }

    pub fn anchor(&self) -> &Position {
        &self.anchor
    }

    pub fn patrol_radius(&self) -> i32 {
        self.patrol_radius
    }

    pub fn has_focus(&self) -> bool {
        self.focus_target.is_some()
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_life > 0
    }

    pub fn distance_to(&self, point: &Position) -> f64 {
        self.position.distance(point)
    }

    /// Commit to `target` and head for where it can best be met
    pub fn focus_on(&mut self, target: &Entity) {
        self.focus_target = Some(target.id);
        self.focus_point = target.intercept_point(&self.position);
    }

    pub fn clear_focus(&mut self) {
        self.focus_target = None;
    }

    pub fn move_to_focus(&self) -> Command {
        Command::move_to(&self.focus_point)
    }

    /// Wander to a random point around the anchor
    pub fn patrol<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Command {
        self.focus_point = self.anchor.jittered(self.patrol_radius, rng);
        self.move_to_focus()
    }
}
