//! Target pool and focus claims
//!
//! The pool is the per-turn list of entities worth a hero's attention:
//! creatures inside or near the own camp, and every opposing hero. Claims
//! record which hero is committed to which target so two heroes do not
//! chase the same creature.

use ahash::AHashMap;

use crate::core::config::CampConfig;
use crate::core::types::EntityId;
use crate::entity::{Base, Entity, EntityKind, OwnHero};

/// Relevant targets for this turn, in snapshot order, indexed by id
#[derive(Debug, Clone, Default)]
pub struct TargetPool {
    targets: Vec<Entity>,
    by_id: AHashMap<EntityId, usize>,
}

impl TargetPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter this turn's entities down to the ones heroes may act on
    pub fn build(entities: &[Entity], own_base: &Base, camp: &CampConfig) -> Self {
        let mut pool = Self::new();
        for entity in entities {
            let relevant = match entity.kind {
                EntityKind::Creature(_) => entity.band(own_base, camp).is_relevant(),
                EntityKind::OpponentHero => true,
                EntityKind::OwnHero => false,
            };
            if relevant {
                pool.push(entity.clone());
            }
        }
        tracing::trace!("target pool: {} of {} entities", pool.len(), entities.len());
        pool
    }

    /// Append a target, keeping the id index in sync
    pub fn push(&mut self, entity: Entity) {
        self.by_id.insert(entity.id, self.targets.len());
        self.targets.push(entity);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.by_id.get(&id).map(|&idx| &self.targets[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<Entity> for TargetPool {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut pool = TargetPool::new();
        for entity in iter {
            pool.push(entity);
        }
        pool
    }
}

/// Which hero is focused on which target, as of now in this turn
///
/// The turn loop seeds it from every hero's carried focus and updates a
/// hero's entry right after that hero decides, so heroes later in the
/// order see the claims made earlier in the same turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusClaims {
    /// (hero, target) pairs, one per focused hero
    claims: Vec<(EntityId, EntityId)>,
}

impl FocusClaims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_heroes(heroes: &[OwnHero]) -> Self {
        let mut claims = Self::new();
        for hero in heroes {
            claims.claim(hero.id, hero.focus_target());
        }
        claims
    }

    /// Record `hero`'s current focus, replacing its previous entry
    pub fn claim(&mut self, hero: EntityId, target: Option<EntityId>) {
        self.claims.retain(|(h, _)| *h != hero);
        if let Some(target) = target {
            self.claims.push((hero, target));
        }
    }

    pub fn is_claimed(&self, target: EntityId) -> bool {
        self.claims.iter().any(|(_, t)| *t == target)
    }

    /// Claimed by any hero other than `hero`
    pub fn is_claimed_by_other(&self, target: EntityId, hero: EntityId) -> bool {
        self.claims.iter().any(|(h, t)| *t == target && *h != hero)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Whether any hero currently focuses `target`
pub fn is_already_focused_by_other_hero(heroes: &[OwnHero], target: EntityId) -> bool {
    FocusClaims::from_heroes(heroes).is_claimed(target)
}
