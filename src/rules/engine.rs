//! Move application: the turn state machine.
//!
//! ```text
//! AwaitingClue(X) --clue--> AwaitingGuess(X)
//! AwaitingGuess(X) --guesses, turn continues--> AwaitingGuess(X)
//! AwaitingGuess(X) --guesses, turn ends--> AwaitingClue(other)
//! AwaitingGuess(X) --assassin / team exhausted--> Finished(winner)
//! ```
//!
//! Every operation is a pure function from the current session to a new
//! one. The input session is never modified, and a rejected move leaves
//! no trace.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::cards::CardColor;
use crate::core::{Role, Team};
use crate::error::{GameError, Result};
use crate::moves::{narrate, Clue, ClueMove, GuessMove, Move};
use crate::session::{Session, TranscriptEntry};

/// Why a guess was skipped without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No card carries the word.
    UnknownWord,
    /// The card was already face up.
    AlreadyRevealed,
}

/// A guess that was discarded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedGuess {
    pub word: String,
    pub reason: SkipReason,
}

/// A card turned over by a guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub word: String,
    pub color: CardColor,
}

/// What happened while resolving one guess batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    /// Cards revealed, in resolution order.
    pub revealed: Vec<Reveal>,
    /// Guesses discarded as unknown or already revealed.
    pub skipped: Vec<SkippedGuess>,
    /// Guesses never looked at because the batch stopped early.
    pub unevaluated: Vec<String>,
    /// Whether the turn passed to the other team.
    pub turn_ended: bool,
    /// Winner declared by this batch.
    pub winner: Option<Team>,
}

/// Reject moves against a finished game or from the wrong role.
fn ensure_turn(session: &Session, expected: Role) -> Result<()> {
    if let Some(winner) = session.winner {
        return Err(GameError::GameOver { winner });
    }
    if session.current_role != expected {
        return Err(GameError::OutOfTurn {
            expected,
            actual: session.current_role,
        });
    }
    Ok(())
}

/// Record a clue and hand the turn to the same team's guesser.
///
/// The clue text is upper-cased and stored with its count as given; the
/// count is not clamped to the cards left.
pub fn apply_clue_move(session: &Session, mv: &ClueMove) -> Result<Session> {
    ensure_turn(session, Role::ClueGiver)?;
    let clue = mv.validate()?;

    let seat = session.current_seat();
    let mut next = session.clone();

    next.transcript.push(TranscriptEntry {
        seat,
        occupant: session.occupant(seat).clone(),
        content: format!("{}\n\nClue: {}", narrate(&mv.reasoning), clue),
    });
    debug!("{seat} gives clue {clue}");

    next.active_clue = Some(clue);
    next.guesses_this_turn = 0;
    next.active_guesses = None;
    next.current_role = Role::Guesser;
    next.previous = Some(seat);

    Ok(next)
}

/// Resolve a guess batch and return the new session.
///
/// See [`resolve_guesses`] for the resolution rules.
pub fn apply_guess_move(session: &Session, mv: &GuessMove) -> Result<Session> {
    resolve_guesses(session, mv).map(|(next, _)| next)
}

/// Resolve a guess batch, reporting what each entry did.
///
/// Guesses are tried strictly in order:
/// - unknown or already revealed words are skipped and logged
/// - the assassin hands the win to the other team and stops the batch
/// - a team's last card wins the game for that team and stops the batch
/// - an opposing or neutral card ends the turn and stops the batch
/// - reaching the clue's count plus one valid guesses ends the turn
///
/// A batch that reveals nothing is a pass and ends the turn. Otherwise,
/// if every reveal was the team's own colour and the allowance is not
/// used up, the guesser stays on turn with the clue still active.
pub fn resolve_guesses(session: &Session, mv: &GuessMove) -> Result<(Session, GuessReport)> {
    ensure_turn(session, Role::Guesser)?;

    let team = session.current_team;
    let seat = session.current_seat();
    let allowance = session.active_clue.as_ref().map_or(1, Clue::guess_allowance);
    let mut next = session.clone();

    next.board.clear_just_revealed();
    next.transcript.push(TranscriptEntry {
        seat,
        occupant: session.occupant(seat).clone(),
        content: format!(
            "{}\n\nGuesses: {}",
            narrate(&mv.reasoning),
            mv.guesses.join(", ")
        ),
    });
    next.active_guesses = Some(mv.guesses.iter().cloned().collect());
    next.previous = Some(seat);

    let mut report = GuessReport::default();
    let mut guesses = mv.guesses.iter();

    for guess in guesses.by_ref() {
        let Some(index) = next.board.position(guess) else {
            warn!("invalid guess by {team}: '{guess}' is not on the board");
            report.skipped.push(SkippedGuess {
                word: guess.clone(),
                reason: SkipReason::UnknownWord,
            });
            continue;
        };
        if next.board[index].revealed {
            warn!("invalid guess by {team}: '{guess}' is already revealed");
            report.skipped.push(SkippedGuess {
                word: guess.clone(),
                reason: SkipReason::AlreadyRevealed,
            });
            continue;
        }
        let Some(color) = next.board.reveal(index) else {
            continue;
        };

        next.guesses_this_turn += 1;
        report.revealed.push(Reveal {
            word: next.board[index].word.clone(),
            color,
        });
        debug!("{team} reveals {} ({color})", next.board[index].word);

        if color == CardColor::Assassin {
            report.winner = Some(team.other());
            break;
        }

        if let Some(owner) = color.team() {
            let left = &mut next.remaining[owner];
            *left = left.saturating_sub(1);
            if *left == 0 {
                report.winner = Some(owner);
                break;
            }
        }

        if color != CardColor::from(team) || next.guesses_this_turn >= allowance {
            report.turn_ended = true;
            break;
        }
    }
    report.unevaluated = guesses.cloned().collect();

    if let Some(winner) = report.winner {
        info!("{winner} wins");
        next.winner = Some(winner);
    } else {
        if report.revealed.is_empty() {
            debug!("{team} passes");
            report.turn_ended = true;
        }
        if report.turn_ended {
            end_turn(&mut next);
        }
    }

    debug_assert!(next.counters_consistent());
    Ok((next, report))
}

/// Apply whichever move shape was produced.
pub fn apply_move(session: &Session, mv: &Move) -> Result<Session> {
    match mv {
        Move::Clue(clue) => apply_clue_move(session, clue),
        Move::Guess(guess) => apply_guess_move(session, guess),
    }
}

/// Pass the turn to the other team's clue-giver.
fn end_turn(session: &mut Session) {
    session.current_team = session.current_team.other();
    session.current_role = Role::ClueGiver;
    session.active_clue = None;
    session.guesses_this_turn = 0;
    debug!("turn passes to {}", session.current_team);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{AgentProfile, SeatOccupant};
    use crate::cards::{Board, Card};
    use crate::core::{Seat, SeatMap};
    use crate::session::Phase;

    fn session() -> Session {
        let board = Board::from_cards(vec![
            Card::new("APPLE", CardColor::Red),
            Card::new("PEAR", CardColor::Red),
            Card::new("PLUM", CardColor::Red),
            Card::new("CHERRY", CardColor::Red),
            Card::new("GRAPE", CardColor::Red),
            Card::new("BERLIN", CardColor::Blue),
            Card::new("PARIS", CardColor::Blue),
            Card::new("SPIKE", CardColor::Assassin),
            Card::new("OCEAN", CardColor::Neutral),
        ])
        .unwrap();
        let seats = SeatMap::new(|seat: Seat| {
            let i = seat.index();
            SeatOccupant::Agent(AgentProfile::new(format!("test/{i}"), format!("Agent {i}"), "A"))
        });
        Session::from_board(board, seats, Team::Red)
    }

    fn clued(count: i64) -> Session {
        apply_clue_move(&session(), &ClueMove::new("fruit", count, "")).unwrap()
    }

    #[test]
    fn test_clue_moves_to_guesser() {
        let next = clued(2);

        assert_eq!(next.phase(), Phase::AwaitingGuess(Team::Red));
        assert_eq!(next.active_clue().unwrap().text, "FRUIT");
        assert_eq!(next.previous_seat(), Some(Seat::new(Team::Red, Role::ClueGiver)));
        assert_eq!(
            next.transcript().last().unwrap().content,
            "No reasoning provided.\n\nClue: FRUIT, 2"
        );
    }

    #[test]
    fn test_clue_does_not_touch_input() {
        let before = session();
        let _ = apply_clue_move(&before, &ClueMove::new("fruit", 2, "")).unwrap();
        assert_eq!(before, session());
    }

    #[test]
    fn test_clue_out_of_turn() {
        let err = apply_clue_move(&clued(1), &ClueMove::new("again", 1, "")).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfTurn {
                expected: Role::ClueGiver,
                actual: Role::Guesser
            }
        );
    }

    #[test]
    fn test_guess_out_of_turn() {
        let err = apply_guess_move(&session(), &GuessMove::new(["APPLE"], "")).unwrap_err();
        assert!(err.is_invalid_state());
    }

    #[test]
    fn test_invalid_clue_leaves_no_trace() {
        let err = apply_clue_move(&session(), &ClueMove::new("", 1, "")).unwrap_err();
        assert!(matches!(err, GameError::Validation(_)));
    }

    #[test]
    fn test_partial_batch_keeps_guesser_on_turn() {
        let (next, report) = resolve_guesses(&clued(2), &GuessMove::new(["apple"], "")).unwrap();

        assert!(!report.turn_ended);
        assert_eq!(next.phase(), Phase::AwaitingGuess(Team::Red));
        assert_eq!(next.guesses_this_turn(), 1);
        assert!(next.active_clue().is_some());

        let (next, report) = resolve_guesses(&next, &GuessMove::new(["pear", "plum"], "")).unwrap();
        assert!(report.turn_ended);
        assert_eq!(next.phase(), Phase::AwaitingClue(Team::Blue));
    }

    #[test]
    fn test_just_revealed_cleared_between_batches() {
        let next = apply_guess_move(&clued(3), &GuessMove::new(["APPLE"], "")).unwrap();
        assert!(next.board().find("APPLE").unwrap().just_revealed);

        let next = apply_guess_move(&next, &GuessMove::new(["PEAR"], "")).unwrap();
        let apple = next.board().find("APPLE").unwrap();
        assert!(apple.revealed);
        assert!(!apple.just_revealed);
        assert!(next.board().find("PEAR").unwrap().just_revealed);
    }

    #[test]
    fn test_revealing_opponents_last_card_wins_for_them() {
        let next = apply_clue_move(&session(), &ClueMove::new("x", 3, "")).unwrap();
        let next = apply_guess_move(&next, &GuessMove::new(["BERLIN"], "")).unwrap();
        assert_eq!(next.phase(), Phase::AwaitingClue(Team::Blue));

        let next = apply_clue_move(&next, &ClueMove::new("y", 1, "")).unwrap();
        let next = apply_guess_move(&next, &GuessMove::new(["OCEAN"], "")).unwrap();
        assert_eq!(next.phase(), Phase::AwaitingClue(Team::Red));

        let next = apply_clue_move(&next, &ClueMove::new("z", 1, "")).unwrap();
        let (next, report) = resolve_guesses(&next, &GuessMove::new(["PARIS"], "")).unwrap();
        assert_eq!(report.winner, Some(Team::Blue));
        assert_eq!(next.winner(), Some(Team::Blue));
    }

    #[test]
    fn test_apply_move_dispatch() {
        let next = apply_move(&session(), &Move::from(ClueMove::new("fruit", 1, ""))).unwrap();
        let next = apply_move(&next, &Move::from(GuessMove::new(["APPLE"], ""))).unwrap();
        assert_eq!(next.remaining(Team::Red), 4);
    }
}
