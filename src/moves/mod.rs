//! Move payloads exchanged with move producers.
//!
//! Producers (an LLM transport after its own JSON repair, or a human input
//! form) hand the engine one of two shapes depending on whose turn it is:
//!
//! - `ClueMove` when the clue-giver is on turn
//! - `GuessMove` when the guesser is on turn
//!
//! Payloads are untrusted. Shape errors surface as `GameError::Validation`.

pub mod clue;
pub mod guess;

pub use clue::{Clue, ClueMove};
pub use guess::GuessMove;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::Role;
use crate::error::{GameError, Result};

/// Either move shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Move {
    Clue(ClueMove),
    Guess(GuessMove),
}

impl Move {
    /// The role this move shape belongs to.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Move::Clue(_) => Role::ClueGiver,
            Move::Guess(_) => Role::Guesser,
        }
    }

    /// Parse whichever shape the JSON text matches.
    pub fn from_json(text: &str) -> Result<Self> {
        parse_payload(text, "move")
    }

    /// Parse the shape expected from `role`.
    pub fn from_json_for(role: Role, text: &str) -> Result<Self> {
        match role {
            Role::ClueGiver => ClueMove::from_json(text).map(Move::Clue),
            Role::Guesser => GuessMove::from_json(text).map(Move::Guess),
        }
    }
}

impl From<ClueMove> for Move {
    fn from(mv: ClueMove) -> Self {
        Move::Clue(mv)
    }
}

impl From<GuessMove> for Move {
    fn from(mv: GuessMove) -> Self {
        Move::Guess(mv)
    }
}

/// Parse a JSON object payload.
///
/// Derived struct deserializers also accept arrays by field position, so
/// anything other than an object is rejected before field decoding.
pub(crate) fn parse_payload<T: DeserializeOwned>(text: &str, what: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| GameError::validation(format!("malformed {what}: {e}")))?;
    if !value.is_object() {
        return Err(GameError::validation(format!(
            "malformed {what}: expected a JSON object"
        )));
    }
    serde_json::from_value(value).map_err(|e| GameError::validation(format!("malformed {what}: {e}")))
}

/// Rationale text for the transcript; blank rationales get a placeholder.
pub(crate) fn narrate(reasoning: &str) -> &str {
    let trimmed = reasoning.trim();
    if trimmed.is_empty() {
        "No reasoning provided."
    } else {
        trimmed
    }
}
