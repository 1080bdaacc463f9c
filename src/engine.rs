//! Engine session facade.
//!
//! Owns the authoritative state of one game session together with its
//! dice source and exposes the full operation set to the UI shell: start
//! game, select a territory, list movement options, move or attack, end
//! the movement phase, and roll reinforcements. Renderers read state
//! through it; they never mutate.

use crate::board::{GameState, PlayerId, Territory};
use crate::dice::{Dice, PrngDice};
use crate::error::EngineError;
use crate::resolve::{
    end_movement_phase, move_units, movement_options, roll_reinforcements, start_game, victor,
    MoveOption, MoveOutcome,
};

/// One game session: its state plus its dice.
#[derive(Debug)]
pub struct Engine<D: Dice> {
    state: GameState,
    dice: D,
}

impl Engine<PrngDice> {
    /// Creates a session with entropy-seeded dice.
    pub fn new() -> Self {
        Engine::with_dice(PrngDice::from_entropy())
    }

    /// Creates a session with a fixed dice seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Engine::with_dice(PrngDice::seeded(seed))
    }
}

impl Default for Engine<PrngDice> {
    fn default() -> Self {
        Engine::new()
    }
}

impl<D: Dice> Engine<D> {
    /// Creates a session around an arbitrary dice source.
    pub fn with_dice(dice: D) -> Self {
        Engine {
            state: GameState::new(),
            dice,
        }
    }

    /// Read access for renderers and UI shells.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starts the game with the given display names and first mover.
    pub fn start_game(
        &mut self,
        player1_name: &str,
        player2_name: &str,
        first_player: PlayerId,
    ) -> Result<(), EngineError> {
        start_game(&mut self.state, player1_name, player2_name, first_player)
    }

    /// Marks a territory as selected. Pure selection: ownership is not
    /// checked here; later actions re-validate.
    pub fn select_territory(&mut self, territory: Territory) {
        self.state.selected = Some(territory);
    }

    /// Lists every neighbor of `from`, tagged relative to the current
    /// player.
    pub fn movement_options(&self, from: Territory) -> Vec<MoveOption> {
        movement_options(&self.state, from)
    }

    /// Moves `num_units` from `from` to `to`, fighting when the target is
    /// not friendly.
    pub fn move_units(
        &mut self,
        from: Territory,
        to: Territory,
        num_units: u32,
    ) -> Result<MoveOutcome, EngineError> {
        move_units(&mut self.state, from, to, num_units, &mut self.dice)
    }

    /// Ends the movement phase. The turn does not pass.
    pub fn end_movement_phase(&mut self) -> Result<(), EngineError> {
        end_movement_phase(&mut self.state)
    }

    /// Rolls for reinforcements and hands the turn to the other player.
    pub fn roll_reinforcements(&mut self) -> Result<u32, EngineError> {
        roll_reinforcements(&mut self.state, &mut self.dice)
    }

    /// Reports the winning player, if any. Advisory only.
    pub fn victor(&self) -> Option<PlayerId> {
        victor(&self.state)
    }

    /// The most recent `n` log entries, newest first, for truncating
    /// displays.
    pub fn recent_log(&self, n: usize) -> Vec<&str> {
        self.state.log.recent(n).collect()
    }
}
