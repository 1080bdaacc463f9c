//! Territory definitions and metadata for the fixed campaign map.
//!
//! All 10 territories are enumerated in map order from Player One's corner
//! to Player Two's. Territory metadata (name, renderer anchor, headquarters
//! status, initial garrison) is stored in a compile-time lookup table
//! indexed by the `Territory` enum discriminant. The anchor coordinates
//! exist for renderers only; no rule reads them.

use serde::{Deserialize, Serialize};

use super::player::{Owner, PlayerId};

/// The number of territories on the campaign map.
pub const TERRITORY_COUNT: usize = 10;

/// The number of headquarters territories (one per player).
pub const HEADQUARTERS_COUNT: usize = 2;

/// A territory on the campaign map.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Territory {
    Ravenspire = 0, // Player One's headquarters
    Thornwood = 1,
    Millhaven = 2,
    Greywater = 3,
    Stonegate = 4,
    Emberfell = 5,
    Darkmoor = 6,
    Saltmarsh = 7,
    Briarglen = 8,
    Goldenhall = 9, // Player Two's headquarters
}

/// All territory variants in index order.
pub const ALL_TERRITORIES: [Territory; TERRITORY_COUNT] = [
    Territory::Ravenspire,
    Territory::Thornwood,
    Territory::Millhaven,
    Territory::Greywater,
    Territory::Stonegate,
    Territory::Emberfell,
    Territory::Darkmoor,
    Territory::Saltmarsh,
    Territory::Briarglen,
    Territory::Goldenhall,
];

impl Territory {
    /// Returns the display name for this territory.
    pub const fn name(self) -> &'static str {
        TERRITORY_INFO[self as usize].name
    }

    /// Returns the fixed map anchor in map pixels, for renderers.
    pub const fn map_anchor(self) -> (u16, u16) {
        (
            TERRITORY_INFO[self as usize].x,
            TERRITORY_INFO[self as usize].y,
        )
    }

    /// Returns true if this territory is a headquarters.
    pub const fn is_headquarters(self) -> bool {
        TERRITORY_INFO[self as usize].is_headquarters
    }

    /// Returns who holds this territory at the start of a session.
    pub const fn initial_owner(self) -> Owner {
        TERRITORY_INFO[self as usize].initial_owner
    }

    /// Returns the garrison stationed here at the start of a session.
    pub const fn initial_units(self) -> u32 {
        TERRITORY_INFO[self as usize].initial_units
    }

    /// Looks up a territory by its display name.
    pub fn from_name(name: &str) -> Option<Territory> {
        ALL_TERRITORIES.iter().find(|t| t.name() == name).copied()
    }
}

impl std::fmt::Display for Territory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static metadata for a territory.
#[derive(Debug, Clone, Copy)]
pub struct TerritoryInfo {
    pub name: &'static str,
    pub x: u16,
    pub y: u16,
    pub is_headquarters: bool,
    pub initial_owner: Owner,
    pub initial_units: u32,
}

/// Compile-time lookup table: index by `Territory as usize`.
///
/// The layout is mirror-symmetric under `i <-> 9 - i`: each player opens
/// with a headquarters of 5 units and two holdings of 3, separated by a
/// neutral belt of four garrisons.
pub static TERRITORY_INFO: [TerritoryInfo; TERRITORY_COUNT] = [
    // 0: Ravenspire
    TerritoryInfo { name: "Ravenspire", x: 90, y: 80, is_headquarters: true, initial_owner: Owner::Player(PlayerId::One), initial_units: 5 },
    // 1: Thornwood
    TerritoryInfo { name: "Thornwood", x: 240, y: 170, is_headquarters: false, initial_owner: Owner::Player(PlayerId::One), initial_units: 3 },
    // 2: Millhaven
    TerritoryInfo { name: "Millhaven", x: 130, y: 290, is_headquarters: false, initial_owner: Owner::Player(PlayerId::One), initial_units: 3 },
    // 3: Greywater
    TerritoryInfo { name: "Greywater", x: 400, y: 130, is_headquarters: false, initial_owner: Owner::Neutral, initial_units: 2 },
    // 4: Stonegate
    TerritoryInfo { name: "Stonegate", x: 310, y: 310, is_headquarters: false, initial_owner: Owner::Neutral, initial_units: 3 },
    // 5: Emberfell
    TerritoryInfo { name: "Emberfell", x: 490, y: 290, is_headquarters: false, initial_owner: Owner::Neutral, initial_units: 3 },
    // 6: Darkmoor
    TerritoryInfo { name: "Darkmoor", x: 400, y: 470, is_headquarters: false, initial_owner: Owner::Neutral, initial_units: 2 },
    // 7: Saltmarsh
    TerritoryInfo { name: "Saltmarsh", x: 670, y: 310, is_headquarters: false, initial_owner: Owner::Player(PlayerId::Two), initial_units: 3 },
    // 8: Briarglen
    TerritoryInfo { name: "Briarglen", x: 560, y: 430, is_headquarters: false, initial_owner: Owner::Player(PlayerId::Two), initial_units: 3 },
    // 9: Goldenhall
    TerritoryInfo { name: "Goldenhall", x: 710, y: 520, is_headquarters: true, initial_owner: Owner::Player(PlayerId::Two), initial_units: 5 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn territory_count_is_10() {
        assert_eq!(ALL_TERRITORIES.len(), 10);
        assert_eq!(TERRITORY_COUNT, 10);
    }

    #[test]
    fn territory_indices_are_sequential() {
        for (i, t) in ALL_TERRITORIES.iter().enumerate() {
            assert_eq!(*t as usize, i, "Territory {:?} has wrong index", t);
        }
    }

    #[test]
    fn name_roundtrip() {
        for t in ALL_TERRITORIES.iter() {
            let name = t.name();
            let roundtrip = Territory::from_name(name)
                .unwrap_or_else(|| panic!("Failed to look up name '{}'", name));
            assert_eq!(*t, roundtrip);
        }
    }

    #[test]
    fn exactly_two_headquarters() {
        let hq: Vec<Territory> = ALL_TERRITORIES
            .iter()
            .filter(|t| t.is_headquarters())
            .copied()
            .collect();
        assert_eq!(hq.len(), HEADQUARTERS_COUNT);
        assert_eq!(hq, vec![Territory::Ravenspire, Territory::Goldenhall]);
        assert_eq!(
            Territory::Ravenspire.initial_owner(),
            Owner::Player(PlayerId::One)
        );
        assert_eq!(
            Territory::Goldenhall.initial_owner(),
            Owner::Player(PlayerId::Two)
        );
    }

    #[test]
    fn initial_layout_is_mirror_symmetric() {
        for i in 0..TERRITORY_COUNT {
            let a = &TERRITORY_INFO[i];
            let b = &TERRITORY_INFO[TERRITORY_COUNT - 1 - i];
            assert_eq!(a.initial_units, b.initial_units, "units differ at {}", i);
            assert_eq!(a.is_headquarters, b.is_headquarters, "hq differs at {}", i);
            let mirrored = match a.initial_owner {
                Owner::Neutral => Owner::Neutral,
                Owner::Player(p) => Owner::Player(p.opponent()),
            };
            assert_eq!(mirrored, b.initial_owner, "owner differs at {}", i);
        }
    }

    #[test]
    fn every_initial_garrison_is_manned() {
        for t in ALL_TERRITORIES.iter() {
            assert!(t.initial_units() >= 1, "{} starts empty", t.name());
        }
    }

    #[test]
    fn holdings_per_side() {
        let held_by = |id: PlayerId| -> usize {
            ALL_TERRITORIES
                .iter()
                .filter(|t| t.initial_owner() == Owner::Player(id))
                .count()
        };
        assert_eq!(held_by(PlayerId::One), 3);
        assert_eq!(held_by(PlayerId::Two), 3);
        let neutral = ALL_TERRITORIES
            .iter()
            .filter(|t| t.initial_owner() == Owner::Neutral)
            .count();
        assert_eq!(neutral, 4);
    }

    #[test]
    fn unknown_name_returns_none() {
        assert_eq!(Territory::from_name("Atlantis"), None);
        assert_eq!(Territory::from_name(""), None);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Territory::Greywater.to_string(), "Greywater");
    }
}
