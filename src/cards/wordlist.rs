//! Word lists boards are drawn from.
//!
//! A word list is a flat, de-duplicated list of non-blank words. The text
//! format is one word per line; surrounding whitespace and blank lines are
//! ignored, and later case-insensitive duplicates are dropped.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::card::normalize_word;
use crate::error::{GameError, Result};

const BUILTIN: &str = include_str!("../../assets/wordlist.txt");

/// De-duplicated list of candidate board words.
///
/// ```
/// use rust_codenames::cards::WordList;
///
/// let words = WordList::parse("Apple\n\n  berlin \nAPPLE\n");
/// assert_eq!(words.as_slice(), ["Apple", "berlin"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse newline-separated text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Build from arbitrary words, trimming and de-duplicating.
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(normalize_word(w)))
            .collect();

        Self { words }
    }

    /// Load a word list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            GameError::configuration(format!("cannot read word list {}: {e}", path.display()))
        })?;
        Ok(Self::parse(&text))
    }

    /// The word list shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::parse(BUILTIN)
    }

    /// Number of unique words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get a word by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in list order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for WordList {
    fn from(words: Vec<String>) -> Self {
        Self::from_words(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words
    }
}
