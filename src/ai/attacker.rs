//! Attacker policy
//!
//! The attacker never touches the defense. It hunts creatures outside the
//! own camp and either escorts ones already heading for the opponent base
//! (shield) or sends healthy ones there (control).

use rand_chacha::ChaCha8Rng;

use crate::ai::{DecisionContext, HeroPolicy};
use crate::command::{ActionCode, Command, Decision};
use crate::entity::{Entity, OwnHero, ThreatFor};

/// Feeds creatures to the opponent base
#[derive(Debug, Clone, Copy, Default)]
pub struct Attacker;

impl HeroPolicy for Attacker {
    fn act(&self, hero: &mut OwnHero, ctx: &DecisionContext, rng: &mut ChaCha8Rng) -> Decision {
        if let Some(id) = hero.focus_target() {
            match ctx.targets.get(id) {
                Some(target) if !ctx.band(target).is_inside() => return attack(hero, target, ctx),
                _ => {
                    tracing::debug!(hero = %hero.id, target = %id, "dropping attack focus");
                    hero.clear_focus();
                }
            }
        }

        if let Some(target) = find_target(hero, ctx) {
            return attack(hero, target, ctx);
        }

        Decision::new(hero.patrol(rng), ActionCode::Move)
    }
}

/// Targets the attacker leaves alone whatever their threat
fn is_unsuitable(target: &Entity, ctx: &DecisionContext) -> bool {
    target.is_opponent_hero() || target.is_shielded() || ctx.band(target).is_inside()
}

/// A threat to the opponent that a shield would see home
fn can_protect(hero: &OwnHero, target: &Entity, ctx: &DecisionContext) -> bool {
    ctx.can_cast()
        && target.threat() == ThreatFor::OpponentBase
        && !target.is_shielded()
        && hero.distance_to(&target.position) < ctx.config.spells.control_range
        && target.distance_to(ctx.opponent_base.position()) < ctx.config.attacker.escort_radius
}

/// A healthy creature not yet heading for the opponent that can be sent there
fn can_control(hero: &OwnHero, target: &Entity, ctx: &DecisionContext) -> bool {
    let tuning = &ctx.config.attacker;
    let Some(creature) = target.creature() else {
        return false;
    };

    ctx.mana > tuning.control_mana
        && creature.threat != ThreatFor::OpponentBase
        && creature.health > tuning.control_min_health
        && hero.distance_to(&target.position) < ctx.config.spells.control_range
        && !ctx.band(target).is_inside()
}

fn is_eligible(hero: &OwnHero, target: &Entity, ctx: &DecisionContext) -> bool {
    if is_unsuitable(target, ctx) {
        return false;
    }
    match target.creature() {
        Some(creature) if creature.threat == ThreatFor::OpponentBase => can_protect(hero, target, ctx),
        Some(creature) => creature.health > ctx.config.attacker.control_min_health,
        None => false,
    }
}

/// Eligible creature with the cheapest predicted interception
fn find_target<'a>(hero: &OwnHero, ctx: &DecisionContext<'a>) -> Option<&'a Entity> {
    ctx.targets
        .iter()
        .filter(|t| is_eligible(hero, t, ctx))
        .map(|t| (t, t.interception_distance(&hero.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(t, _)| t)
}

fn attack(hero: &mut OwnHero, target: &Entity, ctx: &DecisionContext) -> Decision {
    hero.focus_on(target);

    if ctx.mana > ctx.config.attacker.cast_mana {
        if can_protect(hero, target, ctx) {
            tracing::debug!(hero = %hero.id, target = %target.id, "escorting threat with shield");
            hero.clear_focus();
            return Decision::new(Command::shield(target.id), ActionCode::Shield);
        }
        if can_control(hero, target, ctx) {
            tracing::debug!(hero = %hero.id, target = %target.id, "redirecting creature to opponent");
            hero.clear_focus();
            let command = Command::control(target.id, ctx.opponent_base.position());
            return Decision::new(command, ActionCode::Spell);
        }
    }

    Decision::new(hero.move_to_focus(), ActionCode::Move)
}
