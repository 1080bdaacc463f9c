//! Hegemony engine library.
//!
//! Exposes the board representation, rule resolution, dice sources, and
//! the session facade for use by integration tests and UI shells.

pub mod board;
pub mod dice;
pub mod engine;
pub mod error;
pub mod resolve;
