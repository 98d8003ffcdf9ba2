//! Turn-by-turn engine tests against the reference duel walkthrough.

use duel_solver::core::{Encounter, Side};
use duel_solver::rules::{TurnEngine, TurnStart};
use duel_solver::Catalog;

// =============================================================================
// Reference Walkthrough
// =============================================================================

/// The short reference duel, played move by move.
///
/// Attacker: 10 hp, 250 mana. Defender: 13 hp, 8 attack. The winning line is
/// Poison followed by Magic Missile, with the poison tick finishing the
/// defender on its third resolution. Every intermediate value below comes
/// from stepping that duel by hand; together they pin down the turn
/// ordering: effects resolve exactly once per turn, before the move, and a
/// turn's cast never triggers its own effect.
#[test]
fn test_reference_duel_walkthrough() {
    let catalog = Catalog::standard();
    let engine = TurnEngine::new(&catalog, false);
    let poison = catalog.find("Poison").unwrap();
    let missile = catalog.find("Magic Missile").unwrap();

    let state = Encounter::new(10, 250, 13, 8).unwrap().initial_state();

    // -- Attacker turn: nothing active yet, cast Poison --
    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert_eq!(state.defender.hp, 13);

    let state = engine.cast(&state, poison);
    assert_eq!(state.attacker.mana, 77);
    assert_eq!(state.spent, 173);
    assert_eq!(state.defender.hp, 13); // no damage at cast time
    assert_eq!(state.effects.remaining(poison.id), Some(6));
    assert_eq!(state.turn, Side::Defender);

    // -- Defender turn: poison ticks to 5, then the strike lands for 8 --
    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert_eq!(state.defender.hp, 10);
    assert_eq!(state.effects.remaining(poison.id), Some(5));

    let state = engine.strike(&state).expect("attacker survives the strike");
    assert_eq!(state.attacker.hp, 2);
    assert_eq!(state.turn, Side::Attacker);

    // -- Attacker turn: poison ticks to 4, cast Magic Missile --
    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert_eq!(state.defender.hp, 7);
    assert_eq!(state.effects.remaining(poison.id), Some(4));

    let state = engine.cast(&state, missile);
    assert_eq!(state.defender.hp, 3);
    assert_eq!(state.attacker.mana, 24);
    assert_eq!(state.spent, 226);

    // -- Defender turn: the poison tick finishes the duel before any strike --
    match engine.begin_turn(&state) {
        TurnStart::DefenderDown(won) => {
            assert!(won.defender.hp <= 0);
            assert_eq!(won.spent, 226);
            assert_eq!(won.effects.remaining(poison.id), Some(3));
        }
        other => panic!("expected DefenderDown, got {other:?}"),
    }
}

// =============================================================================
// Turn Alternation
// =============================================================================

#[test]
fn test_turns_strictly_alternate() {
    let catalog = Catalog::standard();
    let engine = TurnEngine::new(&catalog, false);
    let shield = catalog.find("Shield").unwrap();

    let state = Encounter::new(50, 500, 55, 8).unwrap().initial_state();
    assert_eq!(state.turn, Side::Attacker);

    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    let state = engine.cast(&state, shield);
    assert_eq!(state.turn, Side::Defender);

    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    let state = engine.strike(&state).unwrap();
    assert_eq!(state.turn, Side::Attacker);
}

#[test]
fn test_effect_timer_spans_both_sides_turns() {
    // Shield runs six turns: it must tick on the defender's turns too, not
    // just the attacker's.
    let catalog = Catalog::standard();
    let engine = TurnEngine::new(&catalog, false);
    let shield = catalog.find("Shield").unwrap();

    let state = Encounter::new(50, 500, 55, 8).unwrap().initial_state();
    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    let mut state = engine.cast(&state, shield);

    let mut timers = Vec::new();
    for _ in 0..3 {
        state = match engine.begin_turn(&state) {
            TurnStart::Ready(ready) => ready,
            other => panic!("expected Ready, got {other:?}"),
        };
        timers.push(state.effects.remaining(shield.id));
        state = match state.turn {
            Side::Attacker => engine.cast(&state, catalog.find("Drain").unwrap()),
            Side::Defender => engine.strike(&state).unwrap(),
        };
    }

    assert_eq!(timers, vec![Some(5), Some(4), Some(3)]);
}

#[test]
fn test_expired_effect_can_be_recast_the_same_turn() {
    // An effect whose timer expires during resolution is castable again on
    // that very turn.
    let catalog = Catalog::standard();
    let engine = TurnEngine::new(&catalog, false);
    let shield = catalog.find("Shield").unwrap();

    let mut state = Encounter::new(50, 500, 55, 8).unwrap().initial_state();
    state.effects.start(shield.id, 1);

    let state = match engine.begin_turn(&state) {
        TurnStart::Ready(ready) => ready,
        other => panic!("expected Ready, got {other:?}"),
    };
    assert!(!state.effects.is_active(shield.id));
    assert_eq!(state.attacker.armor, 7); // final tick still granted armor

    let legal = engine.legal_actions(&state);
    assert!(legal.iter().any(|action| action.id == shield.id));
}
