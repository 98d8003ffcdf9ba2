//! Timed effect definitions and the active-effect timer map.
//!
//! A timed effect is the durable half of an action: it does nothing at cast
//! time and instead fires once per turn while its timer runs. The three
//! effect kinds never interact with each other within a single resolution,
//! which is what keeps resolution order observationally irrelevant.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::catalog::ActionId;

/// The per-turn impact of a durable action.
///
/// Exactly one of these is attached to every `ActionKind::Timed` action.
/// Amounts are fixed at catalog-registration time; the timer lives in
/// `ActiveEffects`, keyed by the owning action's id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimedEffect {
    /// Re-grants this much armor to the attacker every resolution.
    /// Armor is reset to zero at the start of each resolution, so the bonus
    /// lasts exactly as long as the timer does.
    Armor(u32),

    /// Subtracts this much from the defender's hit points every resolution.
    DamageOverTime(u32),

    /// Adds this much to the attacker's resource pool every resolution.
    ManaRegen(u32),
}

/// Active effect timers, keyed by the owning action's id.
///
/// Backed by `im::OrdMap` for two reasons, both inherited from how the rest
/// of the crate treats state:
///
/// - O(1) structural clone, so copying a `CombatState` into the search
///   frontier is cheap.
/// - Ordered iteration, so the timer set contributes to the state
///   fingerprint in a canonical order without an explicit sort.
///
/// ## Invariant
///
/// A timer is strictly positive while its entry exists. `tick` removes the
/// entry in the same step the timer reaches zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveEffects {
    timers: OrdMap<ActionId, u8>,
}

impl ActiveEffects {
    /// Create an empty effect set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an effect is currently active.
    #[must_use]
    pub fn is_active(&self, id: ActionId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Remaining turns for an effect, if active.
    #[must_use]
    pub fn remaining(&self, id: ActionId) -> Option<u8> {
        self.timers.get(&id).copied()
    }

    /// Start an effect with the given duration.
    ///
    /// Panics if the effect is already active (the turn engine filters those
    /// casts out before they reach the state) or if the duration is zero.
    pub fn start(&mut self, id: ActionId, duration: u8) {
        assert!(duration > 0, "timed effects must run for at least one turn");
        let previous = self.timers.insert(id, duration);
        assert!(
            previous.is_none(),
            "effect {id:?} started while already active"
        );
    }

    /// Decrement an effect's timer, removing it when it reaches zero.
    ///
    /// Returns the remaining turn count after the tick.
    pub fn tick(&mut self, id: ActionId) -> u8 {
        let remaining = self
            .timers
            .get(&id)
            .copied()
            .expect("ticked an effect that is not active");
        debug_assert!(remaining > 0, "expired timer left in the active set");

        if remaining <= 1 {
            self.timers.remove(&id);
            0
        } else {
            self.timers.insert(id, remaining - 1);
            remaining - 1
        }
    }

    /// Number of active effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Check if no effects are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Iterate over `(action id, remaining turns)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, u8)> + '_ {
        self.timers.iter().map(|(id, turns)| (*id, *turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_query() {
        let mut effects = ActiveEffects::new();
        assert!(effects.is_empty());

        effects.start(ActionId::new(3), 6);

        assert!(effects.is_active(ActionId::new(3)));
        assert_eq!(effects.remaining(ActionId::new(3)), Some(6));
        assert_eq!(effects.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already active")]
    fn test_start_twice_panics() {
        let mut effects = ActiveEffects::new();
        effects.start(ActionId::new(3), 6);
        effects.start(ActionId::new(3), 6);
    }

    #[test]
    #[should_panic(expected = "at least one turn")]
    fn test_zero_duration_panics() {
        let mut effects = ActiveEffects::new();
        effects.start(ActionId::new(3), 0);
    }

    #[test]
    fn test_tick_decrements_and_expires() {
        let mut effects = ActiveEffects::new();
        effects.start(ActionId::new(2), 2);

        assert_eq!(effects.tick(ActionId::new(2)), 1);
        assert!(effects.is_active(ActionId::new(2)));

        assert_eq!(effects.tick(ActionId::new(2)), 0);
        assert!(!effects.is_active(ActionId::new(2)));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_iter_is_ordered_by_id() {
        let mut effects = ActiveEffects::new();
        effects.start(ActionId::new(4), 5);
        effects.start(ActionId::new(2), 6);
        effects.start(ActionId::new(3), 6);

        let ids: Vec<_> = effects.iter().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![ActionId::new(2), ActionId::new(3), ActionId::new(4)]
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut effects = ActiveEffects::new();
        effects.start(ActionId::new(2), 6);

        let snapshot = effects.clone();
        effects.tick(ActionId::new(2));

        assert_eq!(snapshot.remaining(ActionId::new(2)), Some(6));
        assert_eq!(effects.remaining(ActionId::new(2)), Some(5));
    }

    #[test]
    fn test_serialization() {
        let mut effects = ActiveEffects::new();
        effects.start(ActionId::new(3), 4);

        let json = serde_json::to_string(&effects).unwrap();
        let deserialized: ActiveEffects = serde_json::from_str(&json).unwrap();

        assert_eq!(effects, deserialized);
    }
}
