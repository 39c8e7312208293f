//! Move producers: where moves come from.
//!
//! The engine never talks to a model endpoint or a UI. A `MoveProducer`
//! receives a `MoveRequest` describing what the seat on turn may see and
//! returns a fully formed move. Transports (LLM calls, human input forms)
//! implement this trait; slow or asynchronous transports block or buffer on
//! their side so the engine only ever sees complete payloads.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::agents::SeatOccupant;
use crate::core::{Role, Seat, SeatMap, Team};
use crate::error::{GameError, Result};
use crate::moves::{Clue, Move};
use crate::session::{BoardView, Session};

/// Everything the seat on turn is allowed to know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Seat expected to move.
    pub seat: Seat,
    /// Identity bound to that seat.
    pub occupant: SeatOccupant,
    pub remaining_red: usize,
    pub remaining_blue: usize,
    /// Clue to guess from; only present for guessers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue: Option<Clue>,
    /// Board as seen from the seat's role.
    pub board: BoardView,
}

impl MoveRequest {
    /// Build the request for whoever is on turn.
    #[must_use]
    pub fn for_session(session: &Session) -> Self {
        let seat = session.current_seat();
        Self {
            seat,
            occupant: session.occupant(seat).clone(),
            remaining_red: session.remaining(Team::Red),
            remaining_blue: session.remaining(Team::Blue),
            clue: match seat.role {
                Role::ClueGiver => None,
                Role::Guesser => session.active_clue().cloned(),
            },
            board: BoardView::for_role(session.board(), seat.role),
        }
    }

    #[must_use]
    pub fn team(&self) -> Team {
        self.seat.team
    }

    /// Role whose move shape is expected.
    #[must_use]
    pub fn role(&self) -> Role {
        self.seat.role
    }
}

/// Source of moves for seats on turn.
pub trait MoveProducer {
    /// Produce a move for `request.seat`.
    ///
    /// Failures leave the session untouched; retrying is up to the caller.
    fn produce_move(&mut self, request: &MoveRequest) -> Result<Move>;
}

impl<F> MoveProducer for F
where
    F: FnMut(&MoveRequest) -> Result<Move>,
{
    fn produce_move(&mut self, request: &MoveRequest) -> Result<Move> {
        self(request)
    }
}

/// Replays a fixed sequence of moves, e.g. queued human input.
#[derive(Clone, Debug, Default)]
pub struct ScriptedProducer {
    moves: VecDeque<Move>,
}

impl ScriptedProducer {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Queue another move.
    pub fn push(&mut self, mv: impl Into<Move>) {
        self.moves.push_back(mv.into());
    }

    /// Moves not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveProducer for ScriptedProducer {
    fn produce_move(&mut self, request: &MoveRequest) -> Result<Move> {
        self.moves
            .pop_front()
            .ok_or_else(|| GameError::producer(format!("no scripted move left for {}", request.seat)))
    }
}

/// Routes each request to the producer bound to its seat.
pub struct SeatProducers {
    producers: SeatMap<Box<dyn MoveProducer>>,
}

impl SeatProducers {
    /// Create a router with one producer per seat.
    pub fn new(factory: impl FnMut(Seat) -> Box<dyn MoveProducer>) -> Self {
        Self {
            producers: SeatMap::new(factory),
        }
    }

    /// Replace the producer for one seat.
    #[must_use]
    pub fn with_seat(mut self, seat: Seat, producer: Box<dyn MoveProducer>) -> Self {
        self.producers[seat] = producer;
        self
    }
}

impl MoveProducer for SeatProducers {
    fn produce_move(&mut self, request: &MoveRequest) -> Result<Move> {
        self.producers[request.seat].produce_move(request)
    }
}
