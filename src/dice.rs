//! Dice sources.
//!
//! Every combat and reinforcement roll draws from a `Dice` implementation
//! so the resolvers stay deterministic under test. Production play uses a
//! small PRNG; tests script exact roll sequences.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of six-sided die rolls.
pub trait Dice {
    /// Rolls one die, returning a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Production dice backed by a small PRNG.
#[derive(Debug, Clone)]
pub struct PrngDice {
    rng: SmallRng,
}

impl PrngDice {
    /// Creates dice seeded from OS entropy.
    pub fn from_entropy() -> Self {
        PrngDice {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates dice with a fixed seed for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        PrngDice {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Dice for PrngDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Dice that replay a fixed script of rolls, for deterministic tests.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
}

impl ScriptedDice {
    /// Creates dice that will produce exactly the given rolls in order.
    pub fn new(rolls: &[u8]) -> Self {
        ScriptedDice {
            rolls: rolls.iter().copied().collect(),
        }
    }

    /// Returns how many scripted rolls are left.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    /// Panics when rolled past the end of the script; a test that rolls
    /// more dice than it scripted is wrong.
    fn roll(&mut self) -> u8 {
        self.rolls.pop_front().expect("scripted dice exhausted")
    }
}
