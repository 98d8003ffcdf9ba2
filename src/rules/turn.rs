//! Turn engine: the two transition kinds and the turn-start sequence.
//!
//! Turns alternate strictly between the attacker (action phase) and the
//! defender (deterministic attack phase). Every state handed to the search
//! frontier is a *pre-resolution* state: its effects have not yet fired for
//! the upcoming turn. `begin_turn` performs the fixed start-of-turn
//! sequence, and the per-side transitions (`cast`, `strike`) produce the
//! successors.
//!
//! ## Start-of-turn sequence
//!
//! 1. Hard mode only, attacker's turn only: drain 1 hit point. Lethal drain
//!    ends the branch before effects resolve.
//! 2. Resolve all active effects (armor re-derive, damage over time, regen,
//!    timer ticks).
//! 3. Terminal check, defender first: a damage-over-time kill counts as a
//!    win even if the attacker would also be at ≤ 0 hit points on the same
//!    tick.

use smallvec::SmallVec;

use crate::catalog::{Action, ActionKind, Catalog};
use crate::core::{CombatState, Side};
use crate::effects::resolve;

/// Result of the start-of-turn sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnStart {
    /// The attacker died during the sequence. The branch is a loss.
    AttackerDown,

    /// The defender died during effect resolution. The branch is a win at
    /// the enclosed state's accumulated cost.
    DefenderDown(CombatState),

    /// Both sides stand; the enclosed post-resolution state is ready for the
    /// side to move.
    Ready(CombatState),
}

/// Applies moves for both sides of a duel over one catalog.
#[derive(Clone, Copy, Debug)]
pub struct TurnEngine<'a> {
    catalog: &'a Catalog,
    hard_mode: bool,
}

impl<'a> TurnEngine<'a> {
    /// Create a turn engine for a catalog and difficulty.
    #[must_use]
    pub fn new(catalog: &'a Catalog, hard_mode: bool) -> Self {
        Self { catalog, hard_mode }
    }

    /// The catalog this engine draws actions from.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Run the start-of-turn sequence on a pre-resolution state.
    #[must_use]
    pub fn begin_turn(&self, state: &CombatState) -> TurnStart {
        let mut state = state.clone();

        if self.hard_mode && state.turn == Side::Attacker {
            state.attacker.hp -= 1;
            if state.attacker.hp <= 0 {
                // Lethal drain: the effect engine never runs for this turn.
                return TurnStart::AttackerDown;
            }
        }

        let resolved = resolve(self.catalog, &state);

        if resolved.defender.hp <= 0 {
            return TurnStart::DefenderDown(resolved);
        }
        if resolved.attacker.hp <= 0 {
            return TurnStart::AttackerDown;
        }

        TurnStart::Ready(resolved)
    }

    /// Actions the attacker may cast right now: affordable, and (for timed
    /// actions) not already running.
    #[must_use]
    pub fn legal_actions(&self, state: &CombatState) -> SmallVec<[&'a Action; 8]> {
        debug_assert_eq!(state.turn, Side::Attacker, "only the attacker casts");

        self.catalog
            .iter()
            .filter(|action| action.cost <= state.attacker.mana)
            .filter(|action| {
                action.kind.is_instant() || !state.effects.is_active(action.id)
            })
            .collect()
    }

    /// Cast an action, producing the defender-to-move successor.
    ///
    /// Instant damage and healing land here; a timed action only starts its
    /// timer — its amounts are applied exclusively by the effect engine on
    /// later turns.
    #[must_use]
    pub fn cast(&self, state: &CombatState, action: &Action) -> CombatState {
        debug_assert_eq!(state.turn, Side::Attacker, "only the attacker casts");
        debug_assert!(
            action.cost <= state.attacker.mana,
            "cast of an unaffordable action"
        );

        let mut next = state.clone();
        next.attacker.mana -= action.cost;
        next.spent += action.cost;

        match action.kind {
            ActionKind::Instant { damage, heal } => {
                next.defender.hp -= damage as i32;
                next.attacker.hp += heal as i32;
            }
            ActionKind::Timed { duration, .. } => {
                next.effects.start(action.id, duration);
            }
        }

        next.history.push_back(action.id);
        next.turn = Side::Defender;
        next
    }

    /// The defender's deterministic counter-attack.
    ///
    /// Damage is `max(1, attack − armor)`; armor can never reduce a hit to
    /// nothing. Returns `None` when the blow kills the attacker (the branch
    /// is a loss), otherwise the attacker-to-move successor.
    #[must_use]
    pub fn strike(&self, state: &CombatState) -> Option<CombatState> {
        debug_assert_eq!(state.turn, Side::Defender, "only the defender strikes");

        let damage = state
            .defender
            .attack
            .saturating_sub(state.attacker.armor)
            .max(1);

        let mut next = state.clone();
        next.attacker.hp -= damage as i32;
        if next.attacker.hp <= 0 {
            return None;
        }

        next.turn = Side::Attacker;
        Some(next)
    }
}
