//! Rule resolution.
//!
//! Applies the conquest rules to a game state: dice combat, movement and
//! attack application, phase sequencing, turn handover, and victory
//! detection.

pub mod combat;
pub mod movement;
pub mod phase;

pub use combat::{resolve_neutral_assault, resolve_pitched_battle, CombatReport};
pub use movement::{move_units, movement_options, MoveOption, MoveOutcome, TargetStanding};
pub use phase::{end_movement_phase, roll_reinforcements, start_game, victor};
