//! Adjacency table for the fixed campaign map.
//!
//! Each entry records a directed edge from a territory to one neighbor.
//! The table is symmetric: if A -> B exists then B -> A also exists. All
//! data is compile-time `static`; the rules only ever ask whether a target
//! is reachable in a single step.

use super::territory::Territory;

/// A single directed adjacency between two territories.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyEntry {
    pub from: Territory,
    pub to: Territory,
}

/// Shorthand constructor used only in table construction.
const fn edge(from: Territory, to: Territory) -> AdjacencyEntry {
    AdjacencyEntry { from, to }
}

/// Alias territory names for readability.
use Territory::*;

/// Total number of directed adjacency entries: 16 borders, stored twice.
pub const ADJACENCY_COUNT: usize = 32;

/// Complete adjacency table. Each border is stored as two directed entries.
///
/// The borders mirror under `i <-> 9 - i`, matching the initial layout.
pub static ADJACENCIES: [AdjacencyEntry; ADJACENCY_COUNT] = [
    edge(Ravenspire, Thornwood),
    edge(Thornwood, Ravenspire),
    edge(Ravenspire, Millhaven),
    edge(Millhaven, Ravenspire),
    edge(Thornwood, Millhaven),
    edge(Millhaven, Thornwood),
    edge(Thornwood, Greywater),
    edge(Greywater, Thornwood),
    edge(Millhaven, Stonegate),
    edge(Stonegate, Millhaven),
    edge(Greywater, Stonegate),
    edge(Stonegate, Greywater),
    edge(Greywater, Emberfell),
    edge(Emberfell, Greywater),
    edge(Greywater, Darkmoor),
    edge(Darkmoor, Greywater),
    edge(Stonegate, Emberfell),
    edge(Emberfell, Stonegate),
    edge(Stonegate, Darkmoor),
    edge(Darkmoor, Stonegate),
    edge(Emberfell, Darkmoor),
    edge(Darkmoor, Emberfell),
    edge(Emberfell, Saltmarsh),
    edge(Saltmarsh, Emberfell),
    edge(Darkmoor, Briarglen),
    edge(Briarglen, Darkmoor),
    edge(Saltmarsh, Briarglen),
    edge(Briarglen, Saltmarsh),
    edge(Saltmarsh, Goldenhall),
    edge(Goldenhall, Saltmarsh),
    edge(Briarglen, Goldenhall),
    edge(Goldenhall, Briarglen),
];

/// Returns the neighbors of a territory in table order.
pub fn neighbors_of(territory: Territory) -> Vec<Territory> {
    let mut result = Vec::new();
    for adj in ADJACENCIES.iter() {
        if adj.from == territory && !result.contains(&adj.to) {
            result.push(adj.to);
        }
    }
    result
}

/// Returns true if `to` is reachable from `from` in a single step.
pub fn is_adjacent(from: Territory, to: Territory) -> bool {
    ADJACENCIES
        .iter()
        .any(|adj| adj.from == from && adj.to == to)
}
