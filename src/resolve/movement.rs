//! Movement and attack application.
//!
//! Validates a requested move against the adjacency table and garrison
//! limits, then applies the transfer or hands the fight to combat
//! resolution. A move is one action step: it never advances the phase or
//! the turn.

use crate::board::{is_adjacent, neighbors_of, GameState, Owner, Phase, Territory};
use crate::dice::Dice;
use crate::error::EngineError;

use super::combat::{resolve_neutral_assault, resolve_pitched_battle};

/// How a potential target stands relative to the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStanding {
    Friendly,
    Neutral,
    Hostile,
}

/// One reachable target with its standing and garrison size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOption {
    pub target: Territory,
    pub standing: TargetStanding,
    pub units: u32,
}

/// What a completed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Units transferred between two friendly territories.
    Reinforced { moved: u32 },
    /// The target was taken; `garrison` units now hold it.
    Conquered { garrison: u32 },
    /// The attack failed; `lost` units were removed from the source.
    Repelled { lost: u32 },
}

/// Lists every neighbor of `from` in table order, tagged relative to the
/// current player.
///
/// An empty vector means the territory has nowhere to act; that is not an
/// error.
pub fn movement_options(state: &GameState, from: Territory) -> Vec<MoveOption> {
    neighbors_of(from)
        .into_iter()
        .map(|target| {
            let standing = match state.owner(target) {
                Owner::Neutral => TargetStanding::Neutral,
                Owner::Player(p) if p == state.current_player => TargetStanding::Friendly,
                Owner::Player(_) => TargetStanding::Hostile,
            };
            MoveOption {
                target,
                standing,
                units: state.garrison(target),
            }
        })
        .collect()
}

/// Moves `num_units` from `from` to `to`, fighting when the target is not
/// friendly.
///
/// At least one unit must stay behind, so the source garrison needs 2 or
/// more units and `num_units` must fall in `1..=garrison(from) - 1`. On
/// any error the state is unchanged.
pub fn move_units(
    state: &mut GameState,
    from: Territory,
    to: Territory,
    num_units: u32,
    dice: &mut impl Dice,
) -> Result<MoveOutcome, EngineError> {
    if state.phase != Phase::Movement {
        return Err(EngineError::InvalidPhase {
            operation: "move_units",
            phase: state.phase,
        });
    }
    let mover = state.current_player;
    if !state.holds(mover, from) {
        return Err(EngineError::InvalidSelection {
            territory: from,
            detail: "is not held by the active player",
        });
    }
    if state.garrison(from) < 2 {
        return Err(EngineError::InvalidSelection {
            territory: from,
            detail: "has no units to spare",
        });
    }
    if !is_adjacent(from, to) {
        return Err(EngineError::InvalidMove {
            from,
            to,
            detail: "the territories do not border",
        });
    }
    if num_units == 0 {
        return Err(EngineError::InvalidMove {
            from,
            to,
            detail: "at least one unit must march",
        });
    }
    if num_units > state.garrison(from) - 1 {
        return Err(EngineError::InvalidMove {
            from,
            to,
            detail: "one unit must stay behind",
        });
    }

    let mover_name = state.player(mover).name.clone();
    match state.owner(to) {
        Owner::Player(p) if p == mover => {
            state.garrisons[from as usize] -= num_units;
            state.garrisons[to as usize] += num_units;
            state.log.push(format!(
                "{} marches {} units from {} to {}",
                mover_name, num_units, from, to
            ));
            state.selected = Some(to);
            Ok(MoveOutcome::Reinforced { moved: num_units })
        }
        Owner::Neutral => {
            let defending = state.garrison(to);
            state.log.push(format!(
                "{} assaults {} with {} units against {}",
                mover_name, to, num_units, defending
            ));
            let report = resolve_neutral_assault(num_units, defending, dice, &mut state.log);
            if report.success {
                let garrison = report.surviving_attackers as u32;
                state.owners[to as usize] = Owner::Player(mover);
                state.garrisons[to as usize] = garrison;
                state.garrisons[from as usize] -= num_units;
                state.log.push(format!(
                    "{} falls to {}: {} units hold it",
                    to, mover_name, garrison
                ));
                state.selected = Some(to);
                Ok(MoveOutcome::Conquered { garrison })
            } else {
                state.garrisons[from as usize] -= report.units_lost;
                state.log.push(format!(
                    "The assault on {} is thrown back; {} lost {} units",
                    to, mover_name, report.units_lost
                ));
                state.selected = if state.garrison(from) > 1 {
                    Some(from)
                } else {
                    None
                };
                Ok(MoveOutcome::Repelled {
                    lost: report.units_lost,
                })
            }
        }
        Owner::Player(_) => {
            let defending = state.garrison(to);
            state.log.push(format!(
                "{} attacks {} with {} units against {}",
                mover_name, to, num_units, defending
            ));
            let report = resolve_pitched_battle(num_units, defending, dice, &mut state.log);
            if report.success {
                let garrison = report.surviving_attackers.max(0) as u32;
                state.owners[to as usize] = Owner::Player(mover);
                state.garrisons[to as usize] = garrison;
                state.garrisons[from as usize] -= num_units;
                state.log.push(format!(
                    "{} is conquered by {}: {} units hold it",
                    to, mover_name, garrison
                ));
                state.selected = if report.surviving_attackers > 1 {
                    Some(to)
                } else {
                    None
                };
                Ok(MoveOutcome::Conquered { garrison })
            } else {
                state.garrisons[from as usize] -= num_units;
                state.log.push(format!(
                    "The attack on {} is repelled; all {} attackers are lost",
                    to, num_units
                ));
                state.selected = if state.garrison(from) > 1 {
                    Some(from)
                } else {
                    None
                };
                Ok(MoveOutcome::Repelled { lost: num_units })
            }
        }
    }
}
