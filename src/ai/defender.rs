//! Defender policy
//!
//! Priority each turn:
//! 1. drop a focus whose target vanished
//! 2. sweep a crowd out of the camp with wind
//! 3. drop a focus that wandered out of range
//! 4. switch to an unclaimed critical target
//! 5. keep defending the current focus
//! 6. shield up or banish an opposing hero that comes close
//! 7. pick the nearest unclaimed creature in the camp threatening the base
//! 8. patrol

use rand_chacha::ChaCha8Rng;

use crate::ai::{DecisionContext, HeroPolicy};
use crate::command::{ActionCode, Command, Decision};
use crate::entity::{Entity, OwnHero, ThreatFor};

/// Guards the own camp
#[derive(Debug, Clone, Copy, Default)]
pub struct Defender;

impl HeroPolicy for Defender {
    fn act(&self, hero: &mut OwnHero, ctx: &DecisionContext, rng: &mut ChaCha8Rng) -> Decision {
        let mut focused = hero.focus_target().and_then(|id| ctx.targets.get(id));
        if focused.is_none() && hero.has_focus() {
            tracing::debug!(hero = %hero.id, "focus target is gone");
            hero.clear_focus();
        }

        if let Some(decision) = sweep_crowd(hero, ctx) {
            return decision;
        }

        if let Some(target) = focused {
            if !ctx.band(target).is_relevant() {
                tracing::debug!(hero = %hero.id, target = %target.id, "focus left the camp");
                hero.clear_focus();
                focused = None;
            }
        }

        if let Some(target) = focused {
            if !ctx.band(target).is_critical() {
                let urgent = ctx.targets.iter().find(|t| {
                    ctx.band(t).is_critical() && !ctx.claims.is_claimed_by_other(t.id, hero.id)
                });
                if let Some(urgent) = urgent {
                    tracing::debug!(hero = %hero.id, from = %target.id, to = %urgent.id, "switching to critical target");
                    return defend(hero, urgent, ctx);
                }
            }
            return defend(hero, target, ctx);
        }

        if ctx.can_cast() {
            if let Some(decision) = guard_against_heroes(hero, ctx) {
                return decision;
            }
        }

        if let Some(target) = find_target(hero, ctx) {
            return defend(hero, target, ctx);
        }

        Decision::new(hero.patrol(rng), ActionCode::Move)
    }
}

/// Wind everything back if enough unshielded targets crowd the hero
fn sweep_crowd(hero: &OwnHero, ctx: &DecisionContext) -> Option<Decision> {
    let spells = &ctx.config.spells;
    if !ctx.can_cast() || !ctx.band_of(&hero.position).is_inside() {
        return None;
    }

    let crowd = ctx
        .targets
        .iter()
        .filter(|t| !t.is_shielded() && hero.distance_to(&t.position) < spells.wind_range)
        .count();
    if crowd < spells.crowd_size {
        return None;
    }

    tracing::debug!(hero = %hero.id, crowd, "sweeping crowd out of camp");
    let command = Command::wind(ctx.opponent_base.position()).with_note("NICE");
    Some(Decision::new(command, ActionCode::Spell))
}

/// React to the first opposing hero within alert range
///
/// Shields the defender first; once shielded, banishes the intruder toward
/// the opponent base if it can be reached.
fn guard_against_heroes(hero: &OwnHero, ctx: &DecisionContext) -> Option<Decision> {
    let spells = &ctx.config.spells;
    for target in ctx.targets.iter().filter(|t| t.is_opponent_hero()) {
        let dist = hero.distance_to(&target.position);
        if dist >= spells.shield_alert_range {
            continue;
        }

        if !hero.is_shielded() {
            tracing::debug!(hero = %hero.id, intruder = %target.id, "shielding against opposing hero");
            return Some(Decision::new(Command::shield(hero.id), ActionCode::Shield));
        }
        if !target.is_shielded() && dist < spells.control_range {
            tracing::debug!(hero = %hero.id, intruder = %target.id, "banishing opposing hero");
            let command = Command::control(target.id, ctx.opponent_base.position());
            return Some(Decision::new(command, ActionCode::Banish));
        }
    }
    None
}

/// Nearest unclaimed creature in the camp that is heading for the base;
/// earliest wins ties
fn find_target<'a>(hero: &OwnHero, ctx: &DecisionContext<'a>) -> Option<&'a Entity> {
    ctx.targets
        .iter()
        .filter(|t| t.is_creature())
        .filter(|t| t.threat() == ThreatFor::OwnBase)
        .filter(|t| ctx.band(t).is_inside())
        .filter(|t| !ctx.claims.is_claimed_by_other(t.id, hero.id))
        .map(|t| (t, hero.distance_to(&t.position)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(t, _)| t)
}

/// Commit to `target`: pull it, blow it away, or close in
fn defend(hero: &mut OwnHero, target: &Entity, ctx: &DecisionContext) -> Decision {
    let spells = &ctx.config.spells;
    let tuning = &ctx.config.defender;
    let base = ctx.own_base.position();

    hero.focus_on(target);

    if ctx.can_cast() && !target.is_shielded() {
        let hero_to_base = hero.distance_to(base);
        let hero_to_target = hero.distance_to(&target.position);
        let target_to_base = target.distance_to(base);

        // Target is ahead of the hero: drag it back unless it is already
        // in striking range, in which case only a gate emergency warrants it
        if hero_to_base > target_to_base
            && hero_to_target < spells.control_range
            && (hero_to_target > tuning.pull_min_distance
                || target_to_base < tuning.pull_override_base_distance)
        {
            tracing::debug!(hero = %hero.id, target = %target.id, "pulling target away from base");
            let command = Command::control(target.id, &hero.position);
            return Decision::new(command, ActionCode::Banish);
        }

        if ctx.band(target).is_critical() && hero_to_target < spells.wind_range {
            tracing::debug!(hero = %hero.id, target = %target.id, "blowing critical target away");
            let command = Command::wind(ctx.opponent_base.position());
            return Decision::new(command, ActionCode::Spell);
        }
    }

    Decision::new(hero.move_to_focus(), ActionCode::Approach)
}
