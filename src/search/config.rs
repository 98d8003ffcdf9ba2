//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Which algorithm explores the state graph.
///
/// Both strategies return the same optimum; they differ in traversal order
/// and memory profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Cost-ordered frontier with a visited set. The first win popped is the
    /// global optimum.
    UniformCost,

    /// Recursive descent with memoization and best-cost pruning.
    DepthFirst,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm to run (default: uniform cost).
    pub strategy: Strategy,

    /// Node-expansion budget. Bounds worst-case runtime on pathological
    /// inputs; hitting it yields a distinct out-of-budget outcome rather
    /// than a wrong answer.
    pub max_expansions: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::UniformCost,
            max_expansions: 1_000_000,
        }
    }
}

impl SearchConfig {
    /// Create a config with a custom strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a config with a custom expansion budget.
    #[must_use]
    pub fn with_max_expansions(mut self, budget: u64) -> Self {
        self.max_expansions = budget;
        self
    }
}
