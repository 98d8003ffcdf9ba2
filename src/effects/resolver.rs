//! Per-turn effect resolution.
//!
//! Resolution runs exactly once at the start of every turn, before the side
//! to move acts. It is a pure function: the same input state always yields
//! the same output state, and nothing outside the returned snapshot is
//! touched.
//!
//! ## Resolution steps
//!
//! 1. Reset the attacker's armor to zero. Armor is never carried across
//!    turns; an active armor effect re-grants it below.
//! 2. Walk the active effects in id order, applying each one's per-turn
//!    impact and decrementing its timer. Timers that reach zero are removed
//!    in the same step.
//!
//! Effect kinds do not interact within a single resolution, so the id-order
//! walk is observationally irrelevant — except that the caller checks the
//! defender's hit points first afterwards, which makes a damage-over-time
//! kill take priority over any simultaneous attacker death.

use crate::catalog::{ActionKind, Catalog};
use crate::core::CombatState;

use super::effect::TimedEffect;

/// Resolve all active effects for the upcoming turn.
///
/// Returns a fresh state with armor re-derived, per-turn impacts applied,
/// and every timer decremented (expired entries removed).
#[must_use]
pub fn resolve(catalog: &Catalog, state: &CombatState) -> CombatState {
    let mut next = state.clone();
    next.attacker.armor = 0;

    for (id, _remaining) in state.effects.iter() {
        let action = catalog
            .get(id)
            .expect("active effect refers to an unregistered action");
        let effect = match action.kind {
            ActionKind::Timed { effect, .. } => effect,
            ActionKind::Instant { .. } => {
                unreachable!("instant action {:?} has an active timer", action.name)
            }
        };

        match effect {
            TimedEffect::Armor(bonus) => next.attacker.armor = bonus,
            TimedEffect::DamageOverTime(damage) => next.defender.hp -= damage as i32,
            TimedEffect::ManaRegen(gain) => next.attacker.mana += gain,
        }

        next.effects.tick(id);
    }

    next
}
