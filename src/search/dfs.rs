//! Pruned depth-first search with memoization.
//!
//! The recursive counterpart to uniform-cost search. A branch is cut as soon
//! as its accumulated cost meets the best win found so far, and a memo table
//! records the cheapest cost at which each fingerprint has been reached —
//! revisiting a position at an equal or higher cost cannot improve anything
//! downstream, so the subtree is skipped.
//!
//! The running best is a field of the search context, threaded through the
//! recursion by `&mut self`; there is no shared or global cell, so
//! concurrent solver invocations cannot observe each other.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, trace};

use crate::core::{CombatState, Fingerprint, Side};
use crate::rules::{TurnEngine, TurnStart};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::{SearchOutcome, Solution};

/// Run the depth-first strategy from an initial pre-resolution state.
pub fn search(
    engine: &TurnEngine<'_>,
    config: &SearchConfig,
    initial: CombatState,
    stats: &mut SearchStats,
) -> SearchOutcome {
    let mut dfs = DepthFirst {
        engine,
        config,
        stats,
        memo: FxHashMap::default(),
        best: None,
        truncated: false,
    };

    dfs.explore(initial);

    if dfs.truncated {
        debug!("expansion budget exhausted");
        return SearchOutcome::OutOfBudget;
    }
    match dfs.best {
        Some(solution) => SearchOutcome::Solved(solution),
        None => SearchOutcome::Exhausted,
    }
}

struct DepthFirst<'c, 'e> {
    engine: &'c TurnEngine<'e>,
    config: &'c SearchConfig,
    stats: &'c mut SearchStats,
    /// Cheapest accumulated cost at which each fingerprint has been reached.
    memo: FxHashMap<Fingerprint, u32>,
    /// Best win found so far; owned by this context, never shared.
    best: Option<Solution>,
    truncated: bool,
}

impl DepthFirst<'_, '_> {
    fn explore(&mut self, state: CombatState) {
        if self.truncated {
            return;
        }

        // Costs only grow: a branch that already matches the best win
        // cannot beat it.
        if let Some(ref solution) = self.best {
            if state.spent >= solution.cost {
                return;
            }
        }

        match self.memo.entry(state.fingerprint()) {
            Entry::Occupied(mut reached) => {
                if *reached.get() <= state.spent {
                    self.stats.deduped += 1;
                    return;
                }
                reached.insert(state.spent);
            }
            Entry::Vacant(slot) => {
                slot.insert(state.spent);
            }
        }

        if self.stats.expansions >= self.config.max_expansions {
            self.truncated = true;
            return;
        }
        self.stats.expansions += 1;

        let state = match self.engine.begin_turn(&state) {
            TurnStart::AttackerDown => return,
            TurnStart::DefenderDown(won) => {
                self.record(Solution::from_state(&won));
                return;
            }
            TurnStart::Ready(ready) => ready,
        };

        match state.turn {
            Side::Attacker => {
                for action in self.engine.legal_actions(&state) {
                    let successor = self.engine.cast(&state, action);
                    self.stats.generated += 1;

                    if successor.defender.hp <= 0 {
                        self.record(Solution::from_state(&successor));
                    } else {
                        self.explore(successor);
                    }
                }
            }
            Side::Defender => {
                if let Some(successor) = self.engine.strike(&state) {
                    self.stats.generated += 1;
                    self.explore(successor);
                }
            }
        }
    }

    fn record(&mut self, candidate: Solution) {
        let improved = self
            .best
            .as_ref()
            .map_or(true, |solution| candidate.cost < solution.cost);
        if improved {
            trace!(cost = candidate.cost, "best win improved");
            self.best = Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::Encounter;

    #[test]
    fn test_immediate_kill() {
        let catalog = Catalog::standard();
        let engine = TurnEngine::new(&catalog, false);
        let config = SearchConfig::default();
        let mut stats = SearchStats::new();

        let initial = Encounter::new(10, 250, 4, 8).unwrap().initial_state();
        let outcome = search(&engine, &config, initial, &mut stats);

        assert_eq!(outcome.cost(), Some(53));
    }

    #[test]
    fn test_exhausted_when_nothing_is_affordable() {
        let catalog = Catalog::standard();
        let engine = TurnEngine::new(&catalog, false);
        let config = SearchConfig::default();
        let mut stats = SearchStats::new();

        let initial = Encounter::new(10, 60, 100, 8).unwrap().initial_state();
        let outcome = search(&engine, &config, initial, &mut stats);

        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn test_tiny_budget_truncates() {
        let catalog = Catalog::standard();
        let engine = TurnEngine::new(&catalog, false);
        let config = SearchConfig::default().with_max_expansions(1);
        let mut stats = SearchStats::new();

        let initial = Encounter::new(10, 250, 13, 8).unwrap().initial_state();
        let outcome = search(&engine, &config, initial, &mut stats);

        assert_eq!(outcome, SearchOutcome::OutOfBudget);
    }
}
