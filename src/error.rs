//! Typed errors for engine operations.
//!
//! The UI is expected to offer only legal choices, but every operation
//! still validates its preconditions and fails explicitly rather than
//! corrupt state. A rejected operation leaves the state untouched; nothing
//! here is fatal or retried.

use thiserror::Error;

use crate::board::{Phase, Territory};

/// Errors returned when an operation's preconditions are not met.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The chosen territory cannot act for the current player.
    #[error("invalid selection: {territory} {detail}")]
    InvalidSelection {
        territory: Territory,
        detail: &'static str,
    },

    /// The requested movement violates adjacency or unit-count limits.
    #[error("invalid move from {from} to {to}: {detail}")]
    InvalidMove {
        from: Territory,
        to: Territory,
        detail: &'static str,
    },

    /// The operation is not permitted in the current phase.
    #[error("{operation} is not allowed during the {phase} phase")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_territories() {
        let err = EngineError::InvalidMove {
            from: Territory::Ravenspire,
            to: Territory::Goldenhall,
            detail: "the territories do not border",
        };
        assert_eq!(
            err.to_string(),
            "invalid move from Ravenspire to Goldenhall: the territories do not border"
        );
    }

    #[test]
    fn messages_name_the_phase() {
        let err = EngineError::InvalidPhase {
            operation: "roll_reinforcements",
            phase: Phase::Movement,
        };
        assert_eq!(
            err.to_string(),
            "roll_reinforcements is not allowed during the movement phase"
        );
    }
}
