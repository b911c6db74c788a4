//! Error taxonomy for the engine.
//!
//! Illegal moves are not errors: they are normalized to "stay in place" when
//! queued. Everything here is caller misuse of the lifecycle or setup.

use thiserror::Error;

use crate::core::PlayerId;

/// Errors returned by the public engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Unknown map scheme or malformed layout.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A player with this name is already registered.
    #[error("there is already a player named {name:?}")]
    DuplicateName { name: String },

    /// All player slots are taken.
    #[error("all {capacity} player slots are already filled")]
    Capacity { capacity: usize },

    /// Operation attempted out of lifecycle order.
    #[error("cannot {operation}: {reason}")]
    InvalidState {
        operation: &'static str,
        reason: String,
    },

    /// Frame advance requested before every player queued an action.
    #[error("players without a queued action: {missing:?}")]
    IncompleteTurn { missing: Vec<String> },

    /// The player handle was not issued by this game.
    #[error("{player} is not registered in this game")]
    UnknownPlayer { player: PlayerId },

    /// Binary encoding or decoding failed.
    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}

impl GameError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            operation,
            reason: reason.into(),
        }
    }
}

impl From<bincode::Error> for GameError {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
