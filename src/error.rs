//! Error taxonomy for session creation and move application.
//!
//! Invalid individual guesses are not errors: they are skipped during
//! resolution and reported through `GuessReport` and the log.

use thiserror::Error;

use crate::core::{Role, Team};

/// Errors returned by the engine and its configuration layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed move payload (wrong shape or types).
    #[error("invalid move payload: {0}")]
    Validation(String),

    /// Session cannot be created from the given configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A move was submitted after the game ended.
    #[error("game is over: {winner} has already won")]
    GameOver { winner: Team },

    /// A move of the wrong shape for the current role.
    #[error("expected a {expected} move, but the {actual} is on turn")]
    OutOfTurn { expected: Role, actual: Role },

    /// The move producer failed to deliver a move.
    #[error("move producer failed: {0}")]
    Producer(String),
}

impl GameError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a Producer error
    pub fn producer(message: impl Into<String>) -> Self {
        Self::Producer(message.into())
    }

    /// Whether the operation was rejected because of the session's state
    /// rather than the payload or the configuration.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::GameOver { .. } | Self::OutOfTurn { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
