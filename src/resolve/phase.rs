//! Phase sequencing and turn flow.
//!
//! Moves a session through setup, movement, and reinforcement, hands the
//! turn between the players, and reports victory.
//!
//! Phase flow:
//! - Setup         -> Movement (once, via `start_game`)
//! - Movement      -> Reinforcement (via `end_movement_phase`)
//! - Reinforcement -> Movement of the other player (via
//!   `roll_reinforcements`), looping indefinitely.

use crate::board::{GameState, Owner, Phase, PlayerId, ALL_TERRITORIES};
use crate::dice::Dice;
use crate::error::EngineError;

/// Die value that musters headquarters reinforcements.
const REINFORCEMENT_ROLL: u8 = 6;

/// Units mustered when the reinforcement roll hits.
const REINFORCEMENT_UNITS: u32 = 2;

/// Starts the game: names the players, seats the first mover, and opens
/// the movement phase.
///
/// Names are cosmetic and taken as given. Callers holding an untyped seat
/// number go through `PlayerId::from_number` first.
pub fn start_game(
    state: &mut GameState,
    player1_name: &str,
    player2_name: &str,
    first_player: PlayerId,
) -> Result<(), EngineError> {
    if state.phase != Phase::Setup {
        return Err(EngineError::InvalidPhase {
            operation: "start_game",
            phase: state.phase,
        });
    }
    state.players[0].name = player1_name.to_string();
    state.players[1].name = player2_name.to_string();
    state.current_player = first_player;
    state.phase = Phase::Movement;
    state.selected = None;
    state
        .log
        .push(format!("{} wins the first turn", state.player(first_player).name));
    state.log.push("The game begins");
    Ok(())
}

/// Ends the movement phase. The turn does not pass.
pub fn end_movement_phase(state: &mut GameState) -> Result<(), EngineError> {
    if state.phase != Phase::Movement {
        return Err(EngineError::InvalidPhase {
            operation: "end_movement_phase",
            phase: state.phase,
        });
    }
    state.phase = Phase::Reinforcement;
    state.log.push(format!(
        "{} ends the movement phase",
        state.player(state.current_player).name
    ));
    Ok(())
}

/// Rolls for reinforcements, then hands the turn to the other player.
///
/// A 6 musters two units at the current player's headquarters. The turn
/// passes regardless of the roll, so every call advances the turn exactly
/// once. Returns the number of units mustered.
pub fn roll_reinforcements(
    state: &mut GameState,
    dice: &mut impl Dice,
) -> Result<u32, EngineError> {
    if state.phase != Phase::Reinforcement {
        return Err(EngineError::InvalidPhase {
            operation: "roll_reinforcements",
            phase: state.phase,
        });
    }
    let seat = state.current_player;
    let name = state.player(seat).name.clone();
    let roll = dice.roll();
    let mustered = if roll == REINFORCEMENT_ROLL {
        let hq = state.player(seat).headquarters;
        state.garrisons[hq as usize] += REINFORCEMENT_UNITS;
        state.log.push(format!(
            "{} rolls a {}: {} fresh units muster at {}",
            name, roll, REINFORCEMENT_UNITS, hq
        ));
        REINFORCEMENT_UNITS
    } else {
        state
            .log
            .push(format!("{} rolls a {}: no reinforcements arrive", name, roll));
        0
    };

    state.current_player = seat.opponent();
    state.phase = Phase::Movement;
    state.turn_count += 1;
    state.selected = None;
    state.log.push(format!(
        "Turn {}: {} to move",
        state.turn_count,
        state.player(state.current_player).name
    ));
    Ok(mustered)
}

/// Reports the winning player, if any: a seat wins by holding the enemy
/// headquarters, or once the enemy holds no territory at all.
///
/// Purely advisory. No operation consults it and the phase loop never
/// terminates on its own; the session decides when to stop calling in.
pub fn victor(state: &GameState) -> Option<PlayerId> {
    for seat in [PlayerId::One, PlayerId::Two] {
        let enemy = seat.opponent();
        if state.holds(seat, state.player(enemy).headquarters) {
            return Some(seat);
        }
        let enemy_holds_any = ALL_TERRITORIES
            .iter()
            .any(|t| state.owner(*t) == Owner::Player(enemy));
        if !enemy_holds_any {
            return Some(seat);
        }
    }
    None
}
