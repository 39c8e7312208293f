//! The ordered grid of cards for one session.
//!
//! Backed by `im::Vector` so a session can be cloned cheaply on every
//! move: untouched cards are shared structurally between snapshots.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::card::{normalize_word, Card, CardColor};
use crate::error::{GameError, Result};

/// Ordered set of cards with unique words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
}

impl Board {
    /// Build a board from cards.
    ///
    /// Fails if any word is blank or appears twice (case-insensitively).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let cards: Vector<Card> = cards.into_iter().collect();
        let mut seen = FxHashSet::default();

        for card in &cards {
            let key = normalize_word(&card.word);
            if key.is_empty() {
                return Err(GameError::configuration("board contains a blank word"));
            }
            if !seen.insert(key) {
                return Err(GameError::configuration(format!(
                    "board contains '{}' more than once",
                    card.word
                )));
            }
        }

        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find the position of a word (case-insensitive exact match).
    #[must_use]
    pub fn position(&self, word: &str) -> Option<usize> {
        let key = normalize_word(word);
        if key.is_empty() {
            return None;
        }
        self.cards.iter().position(|card| card.matches(&key))
    }

    /// Find a card by word (case-insensitive exact match).
    #[must_use]
    pub fn find(&self, word: &str) -> Option<&Card> {
        self.position(word).and_then(|i| self.cards.get(i))
    }

    /// Number of cards of a colour.
    #[must_use]
    pub fn count(&self, color: CardColor) -> usize {
        self.cards.iter().filter(|c| c.color == color).count()
    }

    /// Number of face-down cards of a colour.
    #[must_use]
    pub fn unrevealed(&self, color: CardColor) -> usize {
        self.cards
            .iter()
            .filter(|c| c.color == color && !c.revealed)
            .count()
    }

    /// Words of a colour, in board order.
    pub fn words_with_color(&self, color: CardColor) -> impl Iterator<Item = &str> {
        self.cards
            .iter()
            .filter(move |c| c.color == color)
            .map(|c| c.word.as_str())
    }

    /// Turn a card face up and flag it as just revealed.
    ///
    /// Returns the card's colour. Revealing an already revealed card is a
    /// no-op apart from the returned colour.
    pub(crate) fn reveal(&mut self, index: usize) -> Option<CardColor> {
        let card = self.cards.get_mut(index)?;
        if !card.revealed {
            card.revealed = true;
            card.just_revealed = true;
        }
        Some(card.color)
    }

    /// Clear every `just_revealed` flag.
    pub(crate) fn clear_just_revealed(&mut self) {
        for card in self.cards.iter_mut().filter(|c| c.just_revealed) {
            card.just_revealed = false;
        }
    }
}

impl Index<usize> for Board {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}
