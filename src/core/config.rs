//! Policy configuration with documented thresholds
//!
//! Every distance and mana threshold the heroes decide on is collected here.
//! Defaults reproduce the tuned league bot; a TOML file can override any
//! subset of them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, WardenError};
use crate::entity::hero::Role;

/// Concentric distance bands around a base
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CampConfig {
    /// Outer edge of the "near" band (exclusive)
    pub near_radius: f64,
    /// Edge of the camp itself (inclusive)
    ///
    /// Also the inner, exclusive edge of the "near" band.
    pub inside_radius: f64,
    /// Creatures this close are about to hit the base (inclusive)
    pub critical_radius: f64,
}

impl Default for CampConfig {
    fn default() -> Self {
        Self {
            near_radius: 9000.0,
            inside_radius: 5000.0,
            critical_radius: 2000.0,
        }
    }
}

/// Spell ranges and mana gates shared by every role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellConfig {
    /// Mana must be strictly above this to cast at all
    pub min_mana: i32,
    /// Reach of the area knock-back (exclusive)
    pub wind_range: f64,
    /// Reach of shield and control (exclusive)
    pub control_range: f64,
    /// Opposing heroes closer than this make a defender react
    pub shield_alert_range: f64,
    /// Unshielded targets in wind range needed for a crowd sweep
    pub crowd_size: usize,
}

impl Default for SpellConfig {
    fn default() -> Self {
        Self {
            min_mana: 10,
            wind_range: 1280.0,
            control_range: 2200.0,
            shield_alert_range: 3000.0,
            crowd_size: 3,
        }
    }
}

/// Defender tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenderConfig {
    pub patrol_radius: i32,
    /// Patrol anchor, offset from the own base toward the board center
    pub anchor: [i32; 2],
    /// A pull is wasted on targets closer than this unless they are at the gate
    pub pull_min_distance: f64,
    /// Targets this close to the base are pulled regardless of hero distance
    pub pull_override_base_distance: f64,
}

impl Default for DefenderConfig {
    fn default() -> Self {
        Self {
            patrol_radius: 2500,
            anchor: [1000, 1000],
            pull_min_distance: 800.0,
            pull_override_base_distance: 500.0,
        }
    }
}

/// Attacker tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackerConfig {
    pub patrol_radius: i32,
    /// Patrol anchor, offset from the own base toward the board center
    pub anchor: [i32; 2],
    /// Mana reserve the attacker leaves to the defenders
    pub cast_mana: i32,
    /// Mana needed before redirecting a creature
    pub control_mana: i32,
    /// Creatures at or below this health are not worth redirecting
    pub control_min_health: i32,
    /// Only escort threats already this close to the opponent base
    pub escort_radius: f64,
}

impl Default for AttackerConfig {
    fn default() -> Self {
        Self {
            patrol_radius: 5000,
            anchor: [12000, 5000],
            cast_mana: 70,
            control_mana: 30,
            control_min_health: 10,
            escort_radius: 9000.0,
        }
    }
}

/// Complete bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    pub camp: CampConfig,
    pub spells: SpellConfig,
    pub defender: DefenderConfig,
    pub attacker: AttackerConfig,
    /// Roles by first-sighting order; heroes past the end defend
    pub roster: Vec<Role>,
    /// Seed for patrol jitter
    pub seed: u64,
}

impl Default for WardenConfig {
    fn default() -> Self {
        Self {
            camp: CampConfig::default(),
            spells: SpellConfig::default(),
            defender: DefenderConfig::default(),
            attacker: AttackerConfig::default(),
            roster: vec![Role::Defender, Role::Defender, Role::Attacker],
            seed: 42,
        }
    }
}

impl WardenConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text, filling gaps with defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: WardenConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Role for the hero sighted at `index`
    pub fn role_for(&self, index: usize) -> Role {
        self.roster.get(index).copied().unwrap_or(Role::Defender)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        let camp = &self.camp;
        if camp.critical_radius <= 0.0 {
            return Err(WardenError::Config(format!(
                "critical_radius ({}) must be positive",
                camp.critical_radius
            )));
        }
        if !(camp.critical_radius < camp.inside_radius && camp.inside_radius < camp.near_radius) {
            return Err(WardenError::Config(format!(
                "camp bands must be ordered critical ({}) < inside ({}) < near ({})",
                camp.critical_radius, camp.inside_radius, camp.near_radius
            )));
        }

        let spells = &self.spells;
        if spells.wind_range <= 0.0 || spells.control_range <= 0.0 || spells.shield_alert_range <= 0.0 {
            return Err(WardenError::Config("spell ranges must be positive".into()));
        }

        if self.defender.patrol_radius < 0 || self.attacker.patrol_radius < 0 {
            return Err(WardenError::Config("patrol radius cannot be negative".into()));
        }

        if self.roster.is_empty() {
            return Err(WardenError::Config("roster needs at least one role".into()));
        }

        Ok(())
    }
}
