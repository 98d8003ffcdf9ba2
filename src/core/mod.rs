//! Core value types: combat state, fingerprints, encounter parameters.

pub mod encounter;
pub mod state;

pub use encounter::{Encounter, EncounterError};
pub use state::{Attacker, CombatState, Defender, Fingerprint, Side};
