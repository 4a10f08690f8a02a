//! Hero decision-making
//!
//! Architecture: one `HeroPolicy` implementation per role, chosen by the
//! hero's role tag. Policies are stateless; everything a hero remembers
//! between turns lives on the `OwnHero` record they are handed.

pub mod attacker;
pub mod context;
pub mod defender;
pub mod targeting;

pub use attacker::Attacker;
pub use context::DecisionContext;
pub use defender::Defender;
pub use targeting::{is_already_focused_by_other_hero, FocusClaims, TargetPool};

use rand_chacha::ChaCha8Rng;

use crate::command::Decision;
use crate::entity::{OwnHero, Role};

/// Per-role decision logic
pub trait HeroPolicy {
    /// Decide this turn's command for `hero`, updating its focus
    fn act(&self, hero: &mut OwnHero, ctx: &DecisionContext, rng: &mut ChaCha8Rng) -> Decision;
}

/// Policy implementing `role`
pub fn policy_for(role: Role) -> &'static dyn HeroPolicy {
    match role {
        Role::Defender => &Defender,
        Role::Attacker => &Attacker,
    }
}
