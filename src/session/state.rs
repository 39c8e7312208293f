//! The full game state handed between moves.
//!
//! A `Session` is never mutated from outside the crate. Each move produces
//! a new session through the rules engine; the old one stays valid, which
//! is cheap because the board and transcript are persistent structures.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::transcript::Transcript;
use crate::agents::SeatOccupant;
use crate::cards::{Board, CardColor};
use crate::core::{Role, Seat, SeatMap, Team, TeamMap};
use crate::error::{GameError, Result};
use crate::moves::Clue;

/// Where the session is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The team's clue-giver is on turn.
    AwaitingClue(Team),
    /// The team's guesser is on turn.
    AwaitingGuess(Team),
    /// The team has won. No further moves are accepted.
    Finished(Team),
}

/// Complete state of one game.
///
/// Deserialized sessions are checked: team counters must match the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) seats: SeatMap<SeatOccupant>,
    pub(crate) current_team: Team,
    pub(crate) current_role: Role,
    pub(crate) previous: Option<Seat>,
    pub(crate) remaining: TeamMap<usize>,
    pub(crate) active_clue: Option<Clue>,
    pub(crate) active_guesses: Option<SmallVec<[String; 4]>>,
    pub(crate) guesses_this_turn: u32,
    pub(crate) winner: Option<Team>,
    pub(crate) transcript: Transcript,
}

/// Unchecked serialized form of a `Session`.
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    seats: SeatMap<SeatOccupant>,
    current_team: Team,
    current_role: Role,
    previous: Option<Seat>,
    remaining: TeamMap<usize>,
    active_clue: Option<Clue>,
    active_guesses: Option<SmallVec<[String; 4]>>,
    guesses_this_turn: u32,
    winner: Option<Team>,
    transcript: Transcript,
}

impl TryFrom<SessionRecord> for Session {
    type Error = GameError;

    fn try_from(record: SessionRecord) -> Result<Self> {
        let session = Self {
            board: record.board,
            seats: record.seats,
            current_team: record.current_team,
            current_role: record.current_role,
            previous: record.previous,
            remaining: record.remaining,
            active_clue: record.active_clue,
            active_guesses: record.active_guesses,
            guesses_this_turn: record.guesses_this_turn,
            winner: record.winner,
            transcript: record.transcript,
        };
        if !session.counters_consistent() {
            return Err(GameError::configuration(format!(
                "session counters (red {}, blue {}) do not match the board",
                session.remaining[Team::Red],
                session.remaining[Team::Blue]
            )));
        }
        Ok(session)
    }
}

impl Session {
    /// Start a session on an existing board.
    ///
    /// Counters are taken from the board's face-down cards, so a partially
    /// revealed board is allowed. The starting team's clue-giver moves first.
    #[must_use]
    pub fn from_board(board: Board, seats: SeatMap<SeatOccupant>, starting_team: Team) -> Self {
        let remaining = TeamMap::new(|team| board.unrevealed(CardColor::from(team)));
        Self {
            board,
            seats,
            current_team: starting_team,
            current_role: Role::ClueGiver,
            previous: None,
            remaining,
            active_clue: None,
            active_guesses: None,
            guesses_this_turn: 0,
            winner: None,
            transcript: Transcript::new(),
        }
    }

    // === Board ===

    /// The cards.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Face-down cards left for a team.
    #[must_use]
    pub fn remaining(&self, team: Team) -> usize {
        self.remaining[team]
    }

    // === Seats ===

    /// All seat bindings.
    #[must_use]
    pub fn seats(&self) -> &SeatMap<SeatOccupant> {
        &self.seats
    }

    /// Identity bound to a seat.
    #[must_use]
    pub fn occupant(&self, seat: Seat) -> &SeatOccupant {
        &self.seats[seat]
    }

    // === Turn ===

    /// Team on turn.
    #[must_use]
    pub fn current_team(&self) -> Team {
        self.current_team
    }

    /// Role on turn.
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.current_role
    }

    /// Seat on turn.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        Seat::new(self.current_team, self.current_role)
    }

    /// Seat that made the last move, if any.
    #[must_use]
    pub fn previous_seat(&self) -> Option<Seat> {
        self.previous
    }

    /// Clue the guesser is working from.
    #[must_use]
    pub fn active_clue(&self) -> Option<&Clue> {
        self.active_clue.as_ref()
    }

    /// Guesses of the latest batch, echoed for display.
    #[must_use]
    pub fn active_guesses(&self) -> Option<&[String]> {
        self.active_guesses.as_deref()
    }

    /// Valid guesses resolved since the current clue was given.
    #[must_use]
    pub fn guesses_this_turn(&self) -> u32 {
        self.guesses_this_turn
    }

    // === Outcome ===

    /// Winning team, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<Team> {
        self.winner
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Current phase of the turn cycle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.winner, self.current_role) {
            (Some(team), _) => Phase::Finished(team),
            (None, Role::ClueGiver) => Phase::AwaitingClue(self.current_team),
            (None, Role::Guesser) => Phase::AwaitingGuess(self.current_team),
        }
    }

    /// Narrated moves.
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Check that each team counter equals its face-down card count.
    #[must_use]
    pub fn counters_consistent(&self) -> bool {
        Team::ALL
            .iter()
            .all(|&team| self.remaining[team] == self.board.unrevealed(CardColor::from(team)))
    }
}
