//! Board representation and game-state types.
//!
//! Contains the core data structures for territories, adjacency, players,
//! ownership, and the overall game state.

pub mod adjacency;
pub mod player;
pub mod state;
pub mod territory;

pub use adjacency::{is_adjacent, neighbors_of, AdjacencyEntry, ADJACENCIES, ADJACENCY_COUNT};
pub use player::{Owner, Player, PlayerColor, PlayerId, STARTING_NOBLES};
pub use state::{GameLog, GameState, Phase};
pub use territory::{Territory, TerritoryInfo, ALL_TERRITORIES, TERRITORY_COUNT, TERRITORY_INFO};
