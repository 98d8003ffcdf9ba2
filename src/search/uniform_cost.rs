//! Uniform-cost graph search.
//!
//! Classic cheapest-first exploration: pop the lowest-cost unexpanded state,
//! run the start-of-turn sequence, expand, push successors. Every edge cost
//! is a positive action cost, so the first time any fingerprint is popped it
//! was reached as cheaply as possible — later pops of the same fingerprint
//! are skipped, and the first win popped is the global optimum.
//!
//! A cast that kills the defender outright is recorded as a *candidate*
//! rather than returned immediately: cheaper frontier entries may still lead
//! to cheaper wins. The candidate becomes the answer only once the popped
//! cost catches up to it, which proves nothing cheaper remains.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::core::{CombatState, Fingerprint, Side};
use crate::rules::{TurnEngine, TurnStart};

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::stats::SearchStats;
use super::{SearchOutcome, Solution};

/// Run the uniform-cost strategy from an initial pre-resolution state.
pub fn search(
    engine: &TurnEngine<'_>,
    config: &SearchConfig,
    initial: CombatState,
    stats: &mut SearchStats,
) -> SearchOutcome {
    let mut frontier = Frontier::new();
    let mut visited: FxHashSet<Fingerprint> = FxHashSet::default();
    let mut best: Option<Solution> = None;

    frontier.push(initial);

    while let Some(state) = frontier.pop() {
        // Pops arrive in non-decreasing cost order: once the popped cost
        // reaches the best candidate, nothing cheaper remains.
        if let Some(ref solution) = best {
            if state.spent >= solution.cost {
                break;
            }
        }

        if !visited.insert(state.fingerprint()) {
            stats.deduped += 1;
            continue;
        }

        if stats.expansions >= config.max_expansions {
            debug!(expansions = stats.expansions, "expansion budget exhausted");
            return SearchOutcome::OutOfBudget;
        }
        stats.expansions += 1;

        let state = match engine.begin_turn(&state) {
            TurnStart::AttackerDown => continue,
            TurnStart::DefenderDown(won) => {
                // Popped in cost order, so this win is the optimum.
                debug!(cost = won.spent, "minimum-cost win popped");
                return SearchOutcome::Solved(Solution::from_state(&won));
            }
            TurnStart::Ready(ready) => ready,
        };

        match state.turn {
            Side::Attacker => {
                // One successor per legal cast; an empty legal set is a dead
                // end and the branch simply ends here.
                for action in engine.legal_actions(&state) {
                    let successor = engine.cast(&state, action);
                    stats.generated += 1;

                    if successor.defender.hp <= 0 {
                        record_candidate(&mut best, Solution::from_state(&successor));
                    } else {
                        frontier.push(successor);
                    }
                }
            }
            Side::Defender => {
                if let Some(successor) = engine.strike(&state) {
                    stats.generated += 1;
                    frontier.push(successor);
                }
            }
        }
    }

    match best {
        Some(solution) => SearchOutcome::Solved(solution),
        None => SearchOutcome::Exhausted,
    }
}

fn record_candidate(best: &mut Option<Solution>, candidate: Solution) {
    let improved = best
        .as_ref()
        .map_or(true, |solution| candidate.cost < solution.cost);
    if improved {
        trace!(cost = candidate.cost, "candidate win recorded");
        *best = Some(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::Encounter;

    #[test]
    fn test_immediate_kill_is_still_proven_minimal() {
        // Defender at 4 hp: Magic Missile kills at cast time on turn one.
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
        // 60 mana buys a single Magic Missile; after that the pool is dry
        // and every branch dead-ends.
        let catalog = Catalog::standard();
        let engine = TurnEngine::new(&catalog, false);
        let config = SearchConfig::default();
        let mut stats = SearchStats::new();

        let initial = Encounter::new(10, 60, 100, 8).unwrap().initial_state();
        let outcome = search(&engine, &config, initial, &mut stats);

        assert_eq!(outcome, SearchOutcome::Exhausted);
    }
}
