//! # rust-codenames
//!
//! A turn-based engine for a two-team word-guessing game in which clue-givers
//! and guessers may be AI agents or humans.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every move is a function from one session to the
//!    next. A rejected move leaves no trace.
//!
//! 2. **Seats, Not Players**: Four fixed seats (two teams, two roles) each
//!    bound to a human or an agent for the whole game.
//!
//! 3. **Transport-Agnostic**: Moves arrive as fully formed payloads. How
//!    they are produced (model calls, input forms) lives behind
//!    `MoveProducer`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Board and transcript use `im-rs` so
//!   sessions clone cheaply on every move.
//!
//! - **Deterministic Setup**: All randomness flows through `GameRng`, so a
//!   seed reproduces the board and the seat binding.
//!
//! ## Modules
//!
//! - `core`: Teams, roles, seats, RNG, configuration
//! - `cards`: Cards, board, word lists
//! - `agents`: Agent profiles, pools, seat binding
//! - `moves`: Clue and guess payloads
//! - `session`: Session state, transcript, role views, creation
//! - `rules`: Move application and win detection
//! - `play`: Move producers and the match runner

pub mod error;
pub mod core;
pub mod cards;
pub mod agents;
pub mod moves;
pub mod session;
pub mod rules;
pub mod play;

// Re-export commonly used types
pub use crate::error::{GameError, Result};

pub use crate::core::{
    Role, Seat, SeatMap, Team, TeamMap,
    GameRng, GameRngState,
    BoardLayout, GameConfig,
};

pub use crate::cards::{normalize_word, Board, Card, CardColor, WordList};

pub use crate::agents::{
    assign_seats, AgentId, AgentPool, AgentProfile,
    SeatConfig, SeatKind, SeatOccupant, TeamSeats,
};

pub use crate::moves::{Clue, ClueMove, GuessMove, Move};

pub use crate::session::{
    create_session, BoardView, CardView, Phase, Session, Transcript, TranscriptEntry,
};

pub use crate::rules::{
    apply_clue_move, apply_guess_move, apply_move, resolve_guesses,
    GuessReport, Reveal, SkipReason, SkippedGuess,
};

pub use crate::play::{
    GameRunner, MatchResult, MoveProducer, MoveRequest, RunnerConfig,
    ScriptedProducer, SeatProducers, StepOutcome,
};
