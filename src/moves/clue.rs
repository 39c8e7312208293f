//! Clue-giver move payload.

use serde::{Deserialize, Deserializer, Serialize};

use crate::cards::normalize_word;
use crate::error::{GameError, Result};

/// Clue-giver move as produced by an agent or the human input form.
///
/// Wire shape: `{ "clue": string, "number": integer, "reasoning": string }`.
/// `number` may also arrive as an integer-valued string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueMove {
    pub clue: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub number: i64,
    #[serde(default)]
    pub reasoning: String,
}

impl ClueMove {
    pub fn new(clue: impl Into<String>, number: i64, reasoning: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            number,
            reasoning: reasoning.into(),
        }
    }

    /// Parse a clue payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        super::parse_payload(text, "clue move")
    }

    /// Check the payload shape and produce the clue to record.
    ///
    /// Only the shape is checked. Whether the clue is a legal word for the
    /// board is left to the producer.
    pub fn validate(&self) -> Result<Clue> {
        let text = normalize_word(&self.clue);
        if text.is_empty() {
            return Err(GameError::validation("clue text is empty"));
        }
        let count = u32::try_from(self.number).map_err(|_| {
            GameError::validation(format!(
                "clue number must be a non-negative integer, got {}",
                self.number
            ))
        })?;
        Ok(Clue { text, count })
    }
}

/// A recorded clue: canonical (upper-cased) text and the stated count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clue {
    pub text: String,
    pub count: u32,
}

impl Clue {
    /// Valid guesses allowed before the turn is forced to end: the stated
    /// count plus one bonus guess.
    #[must_use]
    pub fn guess_allowance(&self) -> u32 {
        self.count.saturating_add(1)
    }
}

impl std::fmt::Display for Clue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.text, self.count)
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Text(String),
    }

    match RawCount::deserialize(deserializer)? {
        RawCount::Int(n) => Ok(n),
        RawCount::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("clue number '{s}' is not an integer"))),
    }
}
