//! Action definitions: id, cost, and kind.
//!
//! An action is either *instant* (its damage/heal lands at cast time) or
//! *timed* (it starts an effect that fires during per-turn resolution and
//! contributes nothing at cast time). The two are disjoint by construction:
//! a single action cannot both hit at cast and carry a timer, so a timed
//! action's listed amount can never double-apply.

use serde::{Deserialize, Serialize};

use crate::effects::TimedEffect;

/// Unique identifier for a catalog action.
///
/// Ids are dense: the catalog stores actions in id order, and the active
/// effect map is keyed (and ordered) by id.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ActionId(pub u16);

impl ActionId {
    /// Create a new action id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActionId({})", self.0)
    }
}

/// What an action does: immediately, or over time. Never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Damage and/or heal applied at cast time.
    Instant {
        /// Damage dealt to the defender on cast.
        damage: u32,
        /// Hit points restored to the attacker on cast.
        heal: u32,
    },

    /// A durable effect that fires during each per-turn resolution while its
    /// timer runs. Nothing is applied at cast time beyond starting the timer.
    Timed {
        /// Number of turns the effect stays active.
        duration: u8,
        /// The per-turn impact.
        effect: TimedEffect,
    },
}

impl ActionKind {
    /// Check if this is an instant action.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        matches!(self, ActionKind::Instant { .. })
    }

    /// Check if this is a timed action.
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        matches!(self, ActionKind::Timed { .. })
    }
}

/// A purchasable move: a name, a cost, and a kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Dense identifier, assigned at registration.
    pub id: ActionId,

    /// Human-readable name, unique within a catalog.
    pub name: String,

    /// Resource cost to cast. Always positive.
    pub cost: u32,

    /// Instant or timed payload.
    pub kind: ActionKind,
}

impl Action {
    /// Create an instant action.
    ///
    /// Panics if the cost is zero — free actions would break the search's
    /// cost-ordering guarantees.
    #[must_use]
    pub fn instant(id: ActionId, name: impl Into<String>, cost: u32, damage: u32, heal: u32) -> Self {
        assert!(cost > 0, "action cost must be positive");
        Self {
            id,
            name: name.into(),
            cost,
            kind: ActionKind::Instant { damage, heal },
        }
    }

    /// Create a timed action.
    ///
    /// Panics if the cost is zero or the duration is zero.
    #[must_use]
    pub fn timed(
        id: ActionId,
        name: impl Into<String>,
        cost: u32,
        duration: u8,
        effect: TimedEffect,
    ) -> Self {
        assert!(cost > 0, "action cost must be positive");
        assert!(duration > 0, "timed actions must run for at least one turn");
        Self {
            id,
            name: name.into(),
            cost,
            kind: ActionKind::Timed { duration, effect },
        }
    }
}
