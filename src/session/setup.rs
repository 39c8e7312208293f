//! Session creation: board draw and seat binding.

use log::debug;

use super::state::Session;
use crate::agents::{assign_seats, SeatConfig};
use crate::cards::{Board, Card};
use crate::core::{GameConfig, GameRng};
use crate::error::Result;

/// Create a fresh session ready for the first clue.
///
/// 1. Draws `layout.total()` distinct words from the word list.
/// 2. Deals the colour pool onto them as a uniform random permutation.
/// 3. Binds each AI seat to a distinct agent from the pool.
///
/// Word drawing, colour dealing and agent binding use independent streams
/// derived from one seed taken from `rng`, so the same RNG state always
/// yields the same session.
pub fn create_session(config: &GameConfig, seats: &SeatConfig, rng: &mut GameRng) -> Result<Session> {
    config.validate()?;

    let session_rng = GameRng::new(rng.next_seed());
    let layout = &config.layout;

    let mut word_rng = session_rng.for_context("words");
    let words = word_rng.sample_indices(config.words.len(), layout.total());

    let mut colors = layout.color_pool(config.starting_team);
    session_rng.for_context("colors").shuffle(&mut colors);

    let board = Board::from_cards(
        words
            .into_iter()
            .zip(colors)
            .map(|(index, color)| Card::new(config.words.as_slice()[index].clone(), color)),
    )?;

    let occupants = assign_seats(seats, &config.agents, &mut session_rng.for_context("agents"))?;

    debug!(
        "created session (seed {}): {} cards, {} AI seats",
        session_rng.seed(),
        board.len(),
        seats.ai_seats().count()
    );

    Ok(Session::from_board(board, occupants, config.starting_team))
}
