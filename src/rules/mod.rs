//! Rules engine: applying moves to sessions.
//!
//! The engine defines:
//! - How a clue moves the turn to the guesser
//! - How guesses are validated, resolved and scored
//! - Win detection and turn rotation
//!
//! It performs no I/O and no locking; callers serialize move application
//! per session.

pub mod engine;

pub use engine::{
    apply_clue_move, apply_guess_move, apply_move, resolve_guesses, GuessReport, Reveal, SkipReason,
    SkippedGuess,
};
