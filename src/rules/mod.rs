//! Turn engine: legality, transitions, and the start-of-turn sequence.

pub mod turn;

pub use turn::{TurnEngine, TurnStart};
