//! Action catalog: registration and lookup.
//!
//! The `Catalog` stores every action available to the attacker. Storage is a
//! dense vector indexed by `ActionId`, so iteration order is registration
//! order and successor enumeration stays deterministic.

use serde::{Deserialize, Serialize};

use crate::effects::TimedEffect;

use super::action::{Action, ActionId};

/// Registry of available actions.
///
/// ## Example
///
/// ```
/// use duel_solver::catalog::{Action, ActionId, Catalog};
///
/// let mut catalog = Catalog::new();
/// catalog.register(Action::instant(ActionId::new(0), "Jab", 10, 2, 0));
///
/// let jab = catalog.get(ActionId::new(0)).unwrap();
/// assert_eq!(jab.name, "Jab");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    actions: Vec<Action>,
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic five-action catalog.
    ///
    /// Costs, amounts, and durations match the reference duel this planner
    /// was built for; resolution order (armor, then damage over time, then
    /// regen) falls out of the id assignment.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(Action::instant(ActionId::new(0), "Magic Missile", 53, 4, 0));
        catalog.register(Action::instant(ActionId::new(1), "Drain", 73, 2, 2));
        catalog.register(Action::timed(
            ActionId::new(2),
            "Shield",
            113,
            6,
            TimedEffect::Armor(7),
        ));
        catalog.register(Action::timed(
            ActionId::new(3),
            "Poison",
            173,
            6,
            TimedEffect::DamageOverTime(3),
        ));
        catalog.register(Action::timed(
            ActionId::new(4),
            "Recharge",
            229,
            5,
            TimedEffect::ManaRegen(101),
        ));
        catalog
    }

    /// Register an action.
    ///
    /// Panics if the action's id is not the next dense id — ids double as
    /// vector indices, so registration must happen in id order.
    pub fn register(&mut self, action: Action) {
        assert_eq!(
            action.id.index(),
            self.actions.len(),
            "action ids must be dense and registered in order"
        );
        self.actions.push(action);
    }

    /// Get an action by id.
    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&Action> {
        self.actions.get(id.index())
    }

    /// Find an action by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.name == name)
    }

    /// Cheapest registered cost, if the catalog is non-empty.
    ///
    /// No search result can ever cost less than this.
    #[must_use]
    pub fn cheapest_cost(&self) -> Option<u32> {
        self.actions.iter().map(|action| action.cost).min()
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over all actions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}
