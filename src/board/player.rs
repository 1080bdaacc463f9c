//! Player seats, colors, and territory ownership.
//!
//! Two fixed seats contest the map. Each seat carries a display name, a
//! presentation color, a reserve of nobles, and a headquarters territory.

use serde::{Deserialize, Serialize};

use super::territory::Territory;

/// Nobles seated at each court when a session opens.
///
/// No rule in the current set consumes them; the count is carried through
/// unchanged.
pub const STARTING_NOBLES: u8 = 3;

/// One of the two player seats.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerId {
    One = 0,
    Two = 1,
}

impl PlayerId {
    /// Returns the seat's index into per-player arrays.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposing seat.
    pub const fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the 1-based seat number used at the UI boundary.
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Parses a seat from its 1-based number.
    pub fn from_number(n: u8) -> Option<PlayerId> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Returns the seat's headquarters on the fixed map.
    pub const fn headquarters(self) -> Territory {
        match self {
            PlayerId::One => Territory::Ravenspire,
            PlayerId::Two => Territory::Goldenhall,
        }
    }
}

/// Fixed per-seat display palette. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Crimson,
    Azure,
}

impl PlayerColor {
    /// Returns the seat's color.
    pub const fn for_seat(seat: PlayerId) -> PlayerColor {
        match seat {
            PlayerId::One => PlayerColor::Crimson,
            PlayerId::Two => PlayerColor::Azure,
        }
    }

    /// Returns the CSS hex value renderers draw with.
    pub const fn hex(self) -> &'static str {
        match self {
            PlayerColor::Crimson => "#b03a2e",
            PlayerColor::Azure => "#2e6fb0",
        }
    }
}

/// Who holds a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    Neutral,
    Player(PlayerId),
}

impl Owner {
    /// Returns true if no player holds the territory.
    pub const fn is_neutral(self) -> bool {
        matches!(self, Owner::Neutral)
    }

    /// Returns true if the given seat holds the territory.
    pub const fn is_player(self, seat: PlayerId) -> bool {
        match self {
            Owner::Player(p) => p as u8 == seat as u8,
            Owner::Neutral => false,
        }
    }
}

/// A player's seat state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// Court nobles in reserve. Carried but not consumed by any rule.
    pub nobles: u8,
    pub color: PlayerColor,
    pub headquarters: Territory,
}

impl Player {
    /// Creates the seat with its fixed color and headquarters and a
    /// placeholder name; `start_game` installs the real names.
    pub fn new(seat: PlayerId) -> Player {
        Player {
            name: format!("Player {}", seat.number()),
            nobles: STARTING_NOBLES,
            color: PlayerColor::for_seat(seat),
            headquarters: seat.headquarters(),
        }
    }
}
