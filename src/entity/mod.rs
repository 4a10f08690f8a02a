//! Entities seen on the board
//!
//! A single `Entity` type carries the fields every entity has, and an
//! `EntityKind` payload for what differs between creatures and heroes.
//! Creatures and opposing heroes are rebuilt from the snapshot every turn;
//! own heroes carry focus across turns and live in `hero::OwnHero`.

pub mod base;
pub mod hero;
pub mod trajectory;

use serde::{Deserialize, Serialize};

use crate::core::config::CampConfig;
use crate::core::types::EntityId;
use crate::spatial::{CampBand, Position};

pub use base::Base;
pub use hero::{OwnHero, Role};
pub use trajectory::{Trajectory, Velocity};

/// Entity type tag from the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Creature,
    OwnHero,
    OpponentHero,
}

impl EntityType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(EntityType::Creature),
            1 => Some(EntityType::OwnHero),
            2 => Some(EntityType::OpponentHero),
            _ => None,
        }
    }
}

/// Which base a creature's current path ends in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatFor {
    #[default]
    Neither,
    OwnBase,
    OpponentBase,
}

impl ThreatFor {
    /// Unknown codes read as no threat
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => ThreatFor::OwnBase,
            2 => ThreatFor::OpponentBase,
            _ => ThreatFor::Neither,
        }
    }
}

/// One parsed entity line of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub kind: EntityType,
    pub x: i32,
    pub y: i32,
    pub shield_life: i32,
    pub is_controlled: bool,
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub velocity: Velocity,
    #[serde(default)]
    pub near_base: bool,
    #[serde(default)]
    pub threat_for: ThreatFor,
}

impl EntityRecord {
    /// Record for a creature
    #[allow(clippy::too_many_arguments)]
    pub fn creature(
        id: i32,
        x: i32,
        y: i32,
        shield_life: i32,
        health: i32,
        velocity: Velocity,
        near_base: bool,
        threat_for: ThreatFor,
    ) -> Self {
        Self {
            id: EntityId(id),
            kind: EntityType::Creature,
            x,
            y,
            shield_life,
            is_controlled: false,
            health,
            velocity,
            near_base,
            threat_for,
        }
    }

    /// Record for a hero of either side
    pub fn hero(id: i32, kind: EntityType, x: i32, y: i32, shield_life: i32) -> Self {
        Self {
            id: EntityId(id),
            kind,
            x,
            y,
            shield_life,
            is_controlled: false,
            health: 0,
            velocity: Velocity::default(),
            near_base: false,
            threat_for: ThreatFor::Neither,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Creature-only state
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub health: i32,
    pub velocity: Velocity,
    /// Already locked onto a base
    pub near_base: bool,
    pub threat: ThreatFor,
    pub trajectory: Trajectory,
}

/// Role-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Creature(Creature),
    OwnHero,
    OpponentHero,
}

/// An entity as seen this turn
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub position: Position,
    /// Turns left on the entity's shield; zero when unshielded
    pub shield_life: i32,
    pub is_controlled: bool,
    pub kind: EntityKind,
}

impl Entity {
    pub fn from_record(record: &EntityRecord) -> Self {
        let position = record.position();
        let kind = match record.kind {
            EntityType::Creature => EntityKind::Creature(Creature {
                health: record.health,
                velocity: record.velocity,
                near_base: record.near_base,
                threat: record.threat_for,
                trajectory: Trajectory::predict(position, record.velocity),
            }),
            EntityType::OwnHero => EntityKind::OwnHero,
            EntityType::OpponentHero => EntityKind::OpponentHero,
        };

        Self {
            id: record.id,
            position,
            shield_life: record.shield_life,
            is_controlled: record.is_controlled,
            kind,
        }
    }

    pub fn creature(&self) -> Option<&Creature> {
        match &self.kind {
            EntityKind::Creature(creature) => Some(creature),
            _ => None,
        }
    }

    pub fn is_creature(&self) -> bool {
        matches!(self.kind, EntityKind::Creature(_))
    }

    pub fn is_opponent_hero(&self) -> bool {
        matches!(self.kind, EntityKind::OpponentHero)
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_life > 0
    }

    /// Threat classification; heroes never threaten a base
    pub fn threat(&self) -> ThreatFor {
        self.creature().map(|c| c.threat).unwrap_or_default()
    }

    pub fn distance_to(&self, point: &Position) -> f64 {
        self.position.distance(point)
    }

    pub fn band(&self, base: &Base, camp: &CampConfig) -> CampBand {
        base.band_of(&self.position, camp)
    }

    /// Where a hero at `from` should head to meet this entity
    ///
    /// Moving creatures are met on their predicted path. Heroes move
    /// unpredictably and, like idle creatures, are chased where they stand.
    pub fn intercept_point(&self, from: &Position) -> Position {
        match &self.kind {
            EntityKind::Creature(creature) if !creature.velocity.is_stationary() => {
                creature.trajectory.best_intercept(from)
            }
            _ => self.position,
        }
    }

    /// Time-adjusted cost of reaching this entity from `from`
    pub fn interception_distance(&self, from: &Position) -> f64 {
        match &self.kind {
            EntityKind::Creature(creature) if !creature.velocity.is_stationary() => {
                creature.trajectory.smallest_interception_distance(from)
            }
            _ => self.distance_to(from),
        }
    }
}
