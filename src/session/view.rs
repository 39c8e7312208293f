//! Role-filtered views of the board.
//!
//! Clue-givers see every card's colour. Guessers see words and reveal
//! state, and colours only for cards already turned over. Move producers
//! build their prompts from these views, never from the raw board.

use serde::{Deserialize, Serialize};

use crate::cards::{Board, CardColor};
use crate::core::Role;

/// What one seat may know about a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub word: String,
    pub revealed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,
}

/// The board as seen from one role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub role: Role,
    pub cards: Vec<CardView>,
}

impl BoardView {
    /// Project a board for `role`.
    #[must_use]
    pub fn for_role(board: &Board, role: Role) -> Self {
        let cards = board
            .iter()
            .map(|card| CardView {
                word: card.word.clone(),
                revealed: card.revealed,
                color: match role {
                    Role::ClueGiver => Some(card.color),
                    Role::Guesser => card.revealed.then_some(card.color),
                },
            })
            .collect();

        Self { role, cards }
    }

    /// Words still face down, in board order.
    pub fn unrevealed_words(&self) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .filter(|c| !c.revealed)
            .map(|c| c.word.as_str())
    }
}
