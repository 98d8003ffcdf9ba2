//! Effect engine: timed effect kinds, active timers, per-turn resolution.

pub mod effect;
pub mod resolver;

pub use effect::{ActiveEffects, TimedEffect};
pub use resolver::resolve;
