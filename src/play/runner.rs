//! Match driver: ask the seat on turn for a move, apply it, repeat.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::producer::{MoveProducer, MoveRequest};
use crate::core::{Seat, Team};
use crate::error::{GameError, Result};
use crate::moves::Move;
use crate::rules::{apply_clue_move, resolve_guesses, GuessReport};
use crate::session::Session;

/// Configuration for a runner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Maximum moves applied by `run` before giving up.
    pub max_moves: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { max_moves: 200 }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per match.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// What one applied move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Seat that moved.
    pub seat: Seat,
    /// Guess resolution details; `None` for clue moves.
    pub report: Option<GuessReport>,
    /// Winner after the move, if the game ended.
    pub winner: Option<Team>,
}

/// Result of driving a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// `None` if the move limit was hit first.
    pub winner: Option<Team>,
    /// Moves applied by this runner.
    pub moves: usize,
}

/// Drives one session with a move producer.
pub struct GameRunner<P: MoveProducer> {
    session: Session,
    producer: P,
    config: RunnerConfig,
    moves: usize,
}

impl<P: MoveProducer> GameRunner<P> {
    pub fn new(session: Session, producer: P, config: RunnerConfig) -> Self {
        Self {
            session,
            producer,
            config,
            moves: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the runner, keeping the final session.
    pub fn into_session(self) -> Session {
        self.session
    }

    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn producer_mut(&mut self) -> &mut P {
        &mut self.producer
    }

    /// Request and apply a single move.
    ///
    /// The session is replaced only if the move applies cleanly. Producer
    /// failures, moves of the wrong shape and rejected payloads all leave
    /// it as it was.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let Some(winner) = self.session.winner() {
            return Err(GameError::GameOver { winner });
        }

        let request = MoveRequest::for_session(&self.session);
        let seat = request.seat;
        let mv = self.producer.produce_move(&request)?;

        if mv.role() != seat.role {
            return Err(GameError::validation(format!(
                "{seat} produced a {} move",
                mv.role()
            )));
        }

        let (next, report) = match &mv {
            Move::Clue(clue) => (apply_clue_move(&self.session, clue)?, None),
            Move::Guess(guess) => {
                let (next, report) = resolve_guesses(&self.session, guess)?;
                (next, Some(report))
            }
        };

        self.session = next;
        self.moves += 1;
        debug!("move {} by {seat} applied", self.moves);

        Ok(StepOutcome {
            seat,
            report,
            winner: self.session.winner(),
        })
    }

    /// Step until the game ends or the move limit is reached.
    ///
    /// The first failing step aborts the run and its error is returned;
    /// the session keeps every move applied before it.
    pub fn run(&mut self) -> Result<MatchResult> {
        while self.moves < self.config.max_moves && !self.session.is_over() {
            self.step()?;
        }

        let result = MatchResult {
            winner: self.session.winner(),
            moves: self.moves,
        };
        match result.winner {
            Some(winner) => info!("match finished after {} moves: {winner} wins", result.moves),
            None => warn!("match stopped after {} moves without a winner", result.moves),
        }
        Ok(result)
    }
}
