//! Cards and their colour identities.

use serde::{Deserialize, Serialize};

use crate::core::Team;

/// Colour identity of a card, fixed when the board is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Red,
    Blue,
    /// Revealing it loses the game for the guessing team.
    Assassin,
    /// Belongs to nobody; revealing it only ends the turn.
    Neutral,
}

impl CardColor {
    /// The team this colour belongs to, if any.
    #[must_use]
    pub const fn team(self) -> Option<Team> {
        match self {
            CardColor::Red => Some(Team::Red),
            CardColor::Blue => Some(Team::Blue),
            CardColor::Assassin | CardColor::Neutral => None,
        }
    }
}

impl From<Team> for CardColor {
    fn from(team: Team) -> Self {
        match team {
            Team::Red => CardColor::Red,
            Team::Blue => CardColor::Blue,
        }
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Assassin => "assassin",
            CardColor::Neutral => "neutral",
        };
        f.write_str(name)
    }
}

/// Canonical comparable form of a word: trimmed and upper-cased.
///
/// Board lookups and clue text both go through this, so matching is
/// case-insensitive and tolerant of stray whitespace.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The word shown on the card. Unique within a board.
    pub word: String,

    /// Colour identity. Never changes after the draw.
    pub color: CardColor,

    /// Whether the card has been turned over. Goes false to true once.
    pub revealed: bool,

    /// Set for cards revealed by the most recent guess batch.
    pub just_revealed: bool,
}

impl Card {
    /// Create a face-down card.
    pub fn new(word: impl Into<String>, color: CardColor) -> Self {
        Self {
            word: word.into(),
            color,
            revealed: false,
            just_revealed: false,
        }
    }

    /// Case-insensitive comparison against an already-normalized word.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        normalize_word(&self.word) == normalized
    }
}
