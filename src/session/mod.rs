//! Session state: board, turn, seats, transcript.
//!
//! ## Session
//!
//! The complete game state. Created once by `create_session`, then
//! replaced move by move by the rules engine.
//!
//! ## Views
//!
//! `BoardView` projects the board for a role so guessers never see hidden
//! colours.

pub mod state;
pub mod transcript;
pub mod view;
pub mod setup;

pub use state::{Phase, Session};
pub use transcript::{Transcript, TranscriptEntry};
pub use view::{BoardView, CardView};
pub use setup::create_session;
