//! Search engine: minimum-cost exploration of the duel state graph.
//!
//! The `Solver` owns a catalog and a configuration and answers one question:
//! what is the cheapest total action cost that guarantees a win, and through
//! which casts? Two interchangeable strategies back it — a uniform-cost
//! frontier search and a memoized depth-first search — which must agree on
//! every input.
//!
//! Outcomes are three-valued. "No winning sequence exists" is a legitimate
//! answer, not an error, and is kept distinct from "the expansion budget ran
//! out before anything was proven".

pub mod config;
pub mod dfs;
pub mod frontier;
pub mod stats;
pub mod uniform_cost;

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{ActionId, Catalog};
use crate::core::{CombatState, Encounter};
use crate::rules::TurnEngine;

pub use config::{SearchConfig, Strategy};
pub use frontier::Frontier;
pub use stats::SearchStats;

/// A proven-minimal winning plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Total cost of the plan. The minimum over all winning paths.
    pub cost: u32,

    /// The casts that achieve it, in order.
    pub actions: Vec<ActionId>,
}

impl Solution {
    /// Build a solution from a winning terminal state.
    pub(crate) fn from_state(state: &CombatState) -> Self {
        debug_assert!(
            state.defender.hp <= 0,
            "solution taken from a state the defender survived"
        );
        Self {
            cost: state.spent,
            actions: state.history.iter().copied().collect(),
        }
    }

    /// Resolve the plan's action ids to catalog names.
    #[must_use]
    pub fn action_names<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        self.actions
            .iter()
            .map(|&id| {
                catalog
                    .get(id)
                    .expect("solution references an unregistered action")
                    .name
                    .as_str()
            })
            .collect()
    }
}

/// Result of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A minimum-cost winning plan was found and proven minimal.
    Solved(Solution),

    /// The reachable state space was exhausted without a win: no winning
    /// sequence exists.
    Exhausted,

    /// The expansion budget ran out before the search could prove an
    /// optimum.
    OutOfBudget,
}

impl SearchOutcome {
    /// The minimum cost, if solved.
    #[must_use]
    pub fn cost(&self) -> Option<u32> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution.cost),
            _ => None,
        }
    }

    /// The winning plan, if solved.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    /// Check if a plan was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// Minimum-cost search over a catalog.
///
/// ## Example
///
/// ```
/// use duel_solver::core::Encounter;
/// use duel_solver::search::Solver;
///
/// let encounter = Encounter::new(10, 250, 13, 8).unwrap();
/// let mut solver = Solver::standard();
///
/// let outcome = solver.solve(&encounter);
/// assert_eq!(outcome.cost(), Some(226));
/// ```
pub struct Solver {
    catalog: Catalog,
    config: SearchConfig,
    stats: SearchStats,
}

impl Solver {
    /// Create a solver over a catalog with the given configuration.
    #[must_use]
    pub fn new(catalog: Catalog, config: SearchConfig) -> Self {
        Self {
            catalog,
            config,
            stats: SearchStats::default(),
        }
    }

    /// A solver over the standard catalog with the default configuration.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Catalog::standard(), SearchConfig::default())
    }

    /// Find the minimum-cost winning plan for an encounter.
    ///
    /// Statistics from the previous invocation are reset.
    pub fn solve(&mut self, encounter: &Encounter) -> SearchOutcome {
        let start = Instant::now();
        self.stats.reset();

        let engine = TurnEngine::new(&self.catalog, encounter.hard_mode());
        let initial = encounter.initial_state();

        let outcome = match self.config.strategy {
            Strategy::UniformCost => {
                uniform_cost::search(&engine, &self.config, initial, &mut self.stats)
            }
            Strategy::DepthFirst => dfs::search(&engine, &self.config, initial, &mut self.stats),
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            cost = ?outcome.cost(),
            expansions = self.stats.expansions,
            deduped = self.stats.deduped,
            "search finished"
        );

        outcome
    }

    /// Statistics from the most recent `solve` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The solver's configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The catalog this solver draws actions from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Minimum cost to win an encounter with the standard catalog, or `None` if
/// no winning sequence exists (or none was found within the default budget).
///
/// Use a `Solver` directly to distinguish exhaustion from budget overrun, or
/// to recover the winning plan.
#[must_use]
pub fn solve(encounter: &Encounter) -> Option<u32> {
    Solver::standard().solve(encounter).cost()
}
