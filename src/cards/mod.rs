//! Card system: colours, cards, the board, and word lists.
//!
//! ## Key Types
//!
//! - `CardColor`: Team colour, assassin, or neutral
//! - `Card`: A word with its colour and reveal state
//! - `Board`: The ordered, word-unique grid for one session
//! - `WordList`: Source words boards are drawn from

pub mod card;
pub mod board;
pub mod wordlist;

pub use card::{normalize_word, Card, CardColor};
pub use board::Board;
pub use wordlist::WordList;
