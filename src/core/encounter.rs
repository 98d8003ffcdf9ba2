//! Encounter parameters and boundary validation.
//!
//! An `Encounter` is the validated description of one duel: the attacker's
//! starting vitals, the defender's stats, and the difficulty flag. All four
//! numbers must be positive — a zero or negative value is a caller mistake,
//! rejected here so the search engines never have to reason about degenerate
//! inputs. (An *unwinnable* encounter is not an error; the search reports it
//! as exhausted.)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Attacker, CombatState, Defender, Side};
use crate::effects::ActiveEffects;
use im::Vector;

/// Validation failures for encounter parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EncounterError {
    /// Attacker starting hit points must be at least 1.
    #[error("attacker hit points must be positive (got {0})")]
    AttackerHitPoints(i32),

    /// Starting resource pool must be at least 1.
    #[error("resource pool must be positive (got {0})")]
    ResourcePool(i32),

    /// Defender starting hit points must be at least 1.
    #[error("defender hit points must be positive (got {0})")]
    DefenderHitPoints(i32),

    /// Defender attack power must be at least 1.
    #[error("defender attack power must be positive (got {0})")]
    DefenderAttack(i32),
}

/// Validated initial parameters for one duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    attacker_hp: i32,
    mana: u32,
    defender_hp: i32,
    defender_attack: u32,
    hard_mode: bool,
}

impl Encounter {
    /// Create an encounter, rejecting non-positive parameters.
    pub fn new(
        attacker_hp: i32,
        mana: i32,
        defender_hp: i32,
        defender_attack: i32,
    ) -> Result<Self, EncounterError> {
        if attacker_hp <= 0 {
            return Err(EncounterError::AttackerHitPoints(attacker_hp));
        }
        if mana <= 0 {
            return Err(EncounterError::ResourcePool(mana));
        }
        if defender_hp <= 0 {
            return Err(EncounterError::DefenderHitPoints(defender_hp));
        }
        if defender_attack <= 0 {
            return Err(EncounterError::DefenderAttack(defender_attack));
        }

        Ok(Self {
            attacker_hp,
            mana: mana as u32,
            defender_hp,
            defender_attack: defender_attack as u32,
            hard_mode: false,
        })
    }

    /// Enable or disable hard mode (1 hit point drained at the start of
    /// every attacker turn, before effects resolve).
    #[must_use]
    pub fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    /// Whether hard mode is enabled.
    #[must_use]
    pub fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    /// The opening state: attacker to move, no effects, nothing spent.
    #[must_use]
    pub fn initial_state(&self) -> CombatState {
        CombatState {
            attacker: Attacker {
                hp: self.attacker_hp,
                mana: self.mana,
                armor: 0,
            },
            defender: Defender {
                hp: self.defender_hp,
                attack: self.defender_attack,
            },
            effects: ActiveEffects::new(),
            spent: 0,
            turn: Side::Attacker,
            history: Vector::new(),
        }
    }
}
