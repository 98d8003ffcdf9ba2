//! Combat state: the immutable value the search explores.
//!
//! ## CombatState
//!
//! One snapshot of the duel: both parties' vitals, the active effect timers,
//! the cost spent so far, and whose turn it is. A state is never mutated
//! after it reaches the search frontier — every transition clones. The
//! `im`-backed effect map and cast history make those clones O(1) in the
//! shared parts.
//!
//! ## Fingerprint
//!
//! The deduplication key. It covers everything that determines the future of
//! a state and nothing that doesn't: accumulated cost and cast history are
//! deliberately excluded, so a cheaper route into the same position is
//! recognized as the same position. The effect map iterates in id order,
//! which makes the key canonical without sorting.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::ActionId;
use crate::effects::ActiveEffects;

/// The acting side's vitals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attacker {
    /// Hit points. May go negative transiently; ≤ 0 is dead.
    pub hp: i32,
    /// Resource pool available for casting.
    pub mana: u32,
    /// Armor for the current turn only. Re-derived at every resolution.
    pub armor: u32,
}

/// The scripted side's vitals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defender {
    /// Hit points. May go negative transiently; ≤ 0 is dead.
    pub hp: i32,
    /// Fixed attack power for the deterministic counter-attack.
    pub attack: u32,
}

/// Whose turn it is. Turns alternate strictly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The planning side: casts one action per turn.
    Attacker,
    /// The scripted side: attacks deterministically.
    Defender,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// One immutable snapshot of the duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// Acting side's vitals.
    pub attacker: Attacker,

    /// Scripted side's vitals.
    pub defender: Defender,

    /// Active effect timers, keyed by the owning action.
    pub effects: ActiveEffects,

    /// Total cost spent along this path. Monotonically non-decreasing.
    pub spent: u32,

    /// Side to move.
    pub turn: Side,

    /// Actions cast along this path, in order. Not part of the fingerprint.
    pub history: Vector<ActionId>,
}

impl CombatState {
    /// Deduplication key for this state.
    ///
    /// Two states with equal fingerprints have identical futures; the search
    /// keeps whichever it reached more cheaply.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            attacker_hp: self.attacker.hp,
            mana: self.attacker.mana,
            armor: self.attacker.armor,
            defender_hp: self.defender.hp,
            effects: self.effects.iter().collect(),
            turn: self.turn,
        }
    }
}

/// Normalized, order-independent deduplication key.
///
/// Effect timers are captured in id order (the map iterates that way), so
/// structurally identical states always hash identically. Accumulated cost,
/// cast history, and the defender's constant attack power are excluded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    attacker_hp: i32,
    mana: u32,
    armor: u32,
    defender_hp: i32,
    effects: SmallVec<[(ActionId, u8); 4]>,
    turn: Side,
}
