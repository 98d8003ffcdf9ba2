//! # duel-solver
//!
//! A minimum-cost planner for deterministic turn-based duels: one side casts
//! priced actions (instant hits or timed effects), the other counter-attacks
//! deterministically, and the planner finds the cheapest sequence of casts
//! that guarantees a win.
//!
//! ## Design Principles
//!
//! 1. **Immutable state**: a `CombatState` is never mutated after it reaches
//!    the search frontier; every transition clones. Persistent data
//!    structures (`im`) keep those clones O(1) in the shared parts.
//!
//! 2. **One resolution per turn**: timed effects fire exactly once, at the
//!    start of each turn, inside `begin_turn`. Instant actions land at cast
//!    time. The two can never overlap because `ActionKind` keeps them in
//!    disjoint variants.
//!
//! 3. **Provable optimality**: both search strategies only report a win once
//!    nothing cheaper can remain — the uniform-cost frontier by pop order,
//!    the depth-first search by exhausting everything under the best bound.
//!
//! ## Architecture
//!
//! - **Canonical fingerprints**: effect timers live in an ordered map, so
//!   deduplication keys are order-independent without sorting.
//!
//! - **Cost-ordered frontier**: a min-heap keyed by accumulated cost with an
//!   insertion-sequence tie-break, so equal-cost states have a total order.
//!
//! ## Modules
//!
//! - `core`: combat state, fingerprints, validated encounter parameters
//! - `catalog`: action definitions and the registry that holds them
//! - `effects`: timed effect kinds, active timers, per-turn resolution
//! - `rules`: the turn engine — legality, casts, strikes, turn starts
//! - `search`: the solver and its two strategies

pub mod catalog;
pub mod core;
pub mod effects;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Attacker, CombatState, Defender, Encounter, EncounterError, Fingerprint, Side,
};

pub use crate::catalog::{Action, ActionId, ActionKind, Catalog};

pub use crate::effects::{resolve, ActiveEffects, TimedEffect};

pub use crate::rules::{TurnEngine, TurnStart};

pub use crate::search::{
    solve, SearchConfig, SearchOutcome, SearchStats, Solution, Solver, Strategy,
};
