//! Game state representation.
//!
//! Holds the complete snapshot of a conquest session: territory ownership
//! and garrisons, both player seats, whose turn it is, the phase, the
//! pending selection, and the append-only game log.

use serde::{Deserialize, Serialize};

use super::player::{Owner, Player, PlayerId};
use super::territory::{Territory, ALL_TERRITORIES, TERRITORY_COUNT};

/// The phase within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Movement,
    Reinforcement,
}

impl Phase {
    /// Returns the lowercase phase name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Movement => "movement",
            Phase::Reinforcement => "reinforcement",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Append-only log of human-readable game events.
///
/// Consumers may display a most-recent suffix but never reorder or mutate
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameLog {
    entries: Vec<String>,
}

impl GameLog {
    /// Appends one event.
    pub fn push(&mut self, event: impl Into<String>) {
        self.entries.push(event.into());
    }

    /// Returns every entry in append order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns at most `n` entries, most recent first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().take(n).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Complete game state for one session.
///
/// Ownership and garrisons use fixed-size arrays indexed by
/// `Territory as usize` for O(1) lookup. Exactly one session owns a value
/// of this type; every operation mutates it in place through sequential,
/// caller-driven calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; 2],
    /// Holder of each territory.
    pub owners: [Owner; TERRITORY_COUNT],
    /// Garrison stationed at each territory.
    pub garrisons: [u32; TERRITORY_COUNT],
    pub current_player: PlayerId,
    pub phase: Phase,
    /// Pending UI selection, steered by the engine toward the next
    /// sensible action.
    pub selected: Option<Territory>,
    /// Starts at 1 and advances on every turn handover.
    pub turn_count: u32,
    pub log: GameLog,
}

impl GameState {
    /// Creates a fresh session in the setup phase with the fixed initial
    /// layout and an empty log.
    pub fn new() -> Self {
        let mut owners = [Owner::Neutral; TERRITORY_COUNT];
        let mut garrisons = [0u32; TERRITORY_COUNT];
        for t in ALL_TERRITORIES {
            owners[t as usize] = t.initial_owner();
            garrisons[t as usize] = t.initial_units();
        }
        GameState {
            players: [Player::new(PlayerId::One), Player::new(PlayerId::Two)],
            owners,
            garrisons,
            current_player: PlayerId::One,
            phase: Phase::Setup,
            selected: None,
            turn_count: 1,
            log: GameLog::default(),
        }
    }

    /// Returns who holds a territory.
    pub fn owner(&self, territory: Territory) -> Owner {
        self.owners[territory as usize]
    }

    /// Returns the garrison stationed at a territory.
    pub fn garrison(&self, territory: Territory) -> u32 {
        self.garrisons[territory as usize]
    }

    /// Returns true if the given seat holds the territory.
    pub fn holds(&self, seat: PlayerId, territory: Territory) -> bool {
        self.owner(territory).is_player(seat)
    }

    /// Returns the territories a seat holds, in map order.
    pub fn territories_of(&self, seat: PlayerId) -> Vec<Territory> {
        ALL_TERRITORIES
            .iter()
            .filter(|t| self.holds(seat, **t))
            .copied()
            .collect()
    }

    /// Returns a seat's player record.
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns a seat's player record for mutation.
    pub fn player_mut(&mut self, seat: PlayerId) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Serializes the state as JSON, the only wire format the engine
    /// defines.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restores a state from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<GameState> {
        serde_json::from_str(json)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
