//! Turn orchestration
//!
//! Each turn runs, in order:
//! base refresh -> entity rebuild -> target pool -> hero policies
//!
//! Heroes decide one after another in first-sighting order. Mana spent by a
//! hero and the focus it claims are visible to every hero after it in the
//! same turn.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::{policy_for, DecisionContext, FocusClaims, TargetPool};
use crate::command::{ActionCode, Command, Decision};
use crate::core::config::WardenConfig;
use crate::core::constants::SPELL_COST;
use crate::core::types::{EntityId, Mana, Turn};
use crate::entity::{Base, Entity, EntityType, OwnHero, Role};
use crate::simulation::snapshot::TurnSnapshot;
use crate::spatial::Position;

/// What one hero did in a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroDecision {
    pub hero: EntityId,
    pub role: Role,
    pub decision: Decision,
}

/// Result of a turn, in hero order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    pub turn: Turn,
    pub decisions: Vec<HeroDecision>,
    pub mana_spent: Mana,
}

impl TurnOutcome {
    pub fn commands(&self) -> Vec<Command> {
        self.decisions
            .iter()
            .map(|d| d.decision.command.clone())
            .collect()
    }

    pub fn codes(&self) -> Vec<ActionCode> {
        self.decisions.iter().map(|d| d.decision.code).collect()
    }
}

/// Everything that persists between turns
#[derive(Debug, Clone)]
pub struct MatchState {
    own_base: Base,
    opponent_base: Base,
    heroes: Vec<OwnHero>,
    config: WardenConfig,
    rng: ChaCha8Rng,
    turn: Turn,
}

impl MatchState {
    /// Start a match from the handshake's own base position
    pub fn new(own_base: Position, config: WardenConfig) -> Self {
        let seed = config.seed;
        Self::with_seed(own_base, config, seed)
    }

    /// Start a match with an explicit patrol seed
    pub fn with_seed(own_base: Position, config: WardenConfig, seed: u64) -> Self {
        let own_base = Base::at(own_base);
        Self {
            opponent_base: own_base.mirrored(),
            own_base,
            heroes: Vec::new(),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            turn: 0,
        }
    }

    pub fn own_base(&self) -> &Base {
        &self.own_base
    }

    pub fn opponent_base(&self) -> &Base {
        &self.opponent_base
    }

    pub fn heroes(&self) -> &[OwnHero] {
        &self.heroes
    }

    pub fn hero(&self, id: EntityId) -> Option<&OwnHero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    pub fn config(&self) -> &WardenConfig {
        &self.config
    }

    /// Turns played so far
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Decide one command per hero for this snapshot
    pub fn play_turn(&mut self, snapshot: &TurnSnapshot) -> TurnOutcome {
        self.turn += 1;
        self.own_base.refresh(snapshot.own.health, snapshot.own.mana);
        self.opponent_base
            .refresh(snapshot.opponent.health, snapshot.opponent.mana);

        let entities = self.rebuild_entities(snapshot);
        let pool = TargetPool::build(&entities, &self.own_base, &self.config.camp);
        let mana_before = self.own_base.mana;

        tracing::info!(
            "turn {}: mana {}, {} entities, {} targets",
            self.turn,
            mana_before,
            entities.len(),
            pool.len()
        );

        let mut claims = FocusClaims::from_heroes(&self.heroes);
        let mut decisions = Vec::with_capacity(self.heroes.len());

        for idx in 0..self.heroes.len() {
            let decision = if self.heroes[idx].seen_this_turn {
                let ctx = DecisionContext::new(
                    &self.own_base,
                    &self.opponent_base,
                    self.own_base.mana,
                    &pool,
                    &claims,
                    &self.config,
                );
                let hero = &mut self.heroes[idx];
                policy_for(hero.role).act(hero, &ctx, &mut self.rng)
            } else {
                tracing::warn!(hero = %self.heroes[idx].id, "hero missing from snapshot, waiting");
                Decision::new(Command::wait(), ActionCode::Move)
            };

            let hero = &self.heroes[idx];
            claims.claim(hero.id, hero.focus_target());
            if decision.code.costs_mana() {
                self.own_base.spend(SPELL_COST);
            }

            tracing::debug!(
                hero = %hero.id,
                role = ?hero.role,
                code = decision.code.code(),
                focus = ?hero.focus_target(),
                "decided {:?}",
                decision.command
            );
            decisions.push(HeroDecision {
                hero: hero.id,
                role: hero.role,
                decision,
            });
        }

        let mana_spent = mana_before - self.own_base.mana;
        tracing::info!("turn {}: spent {} mana", self.turn, mana_spent);

        TurnOutcome {
            turn: self.turn,
            decisions,
            mana_spent,
        }
    }

    /// Build this turn's entities and refresh hero records in place
    fn rebuild_entities(&mut self, snapshot: &TurnSnapshot) -> Vec<Entity> {
        for hero in &mut self.heroes {
            hero.seen_this_turn = false;
        }

        for record in snapshot.own_heroes() {
            match self.heroes.iter_mut().find(|h| h.id == record.id) {
                Some(hero) => hero.refresh(record),
                None => {
                    let role = self.config.role_for(self.heroes.len());
                    tracing::info!(hero = %record.id, ?role, "new hero");
                    self.heroes
                        .push(OwnHero::new(record, role, &self.own_base, &self.config));
                }
            }
        }

        snapshot
            .entities
            .iter()
            .filter(|record| record.kind != EntityType::OwnHero)
            .map(Entity::from_record)
            .collect()
    }
}

/// Pure form of a turn: the next state and the commands, input untouched
pub fn decide_turn(state: &MatchState, snapshot: &TurnSnapshot) -> (MatchState, Vec<Command>) {
    let mut next = state.clone();
    let commands = next.play_turn(snapshot).commands();
    (next, commands)
}
