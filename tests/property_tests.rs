//! Property tests over random games.
//!
//! Random seeds and random guess batches, checked against the invariants
//! that must hold after every move.

use proptest::prelude::*;

use rust_codenames::agents::SeatConfig;
use rust_codenames::cards::CardColor;
use rust_codenames::core::{GameConfig, GameRng, Role, Team};
use rust_codenames::error::GameError;
use rust_codenames::moves::{ClueMove, GuessMove};
use rust_codenames::rules::{apply_clue_move, resolve_guesses};
use rust_codenames::session::{create_session, Session};

/// One turn: a clue count and guess picks. Picks past the board are unknown words.
fn turn_strategy() -> impl Strategy<Value = (i64, Vec<usize>)> {
    (0i64..4, prop::collection::vec(0usize..30, 0..6))
}

fn words_for(session: &Session, picks: &[usize]) -> Vec<String> {
    picks
        .iter()
        .map(|&i| match session.board().get(i) {
            Some(card) if i % 2 == 0 => card.word.to_lowercase(),
            Some(card) => card.word.clone(),
            None => format!("NOT-ON-BOARD-{i}"),
        })
        .collect()
}

fn revealed_flags(session: &Session) -> Vec<bool> {
    session.board().iter().map(|card| card.revealed).collect()
}

proptest! {
    #[test]
    fn prop_invariants_hold_every_move(
        seed in any::<u64>(),
        turns in prop::collection::vec(turn_strategy(), 1..40),
    ) {
        let mut session = create_session(&GameConfig::default(), &SeatConfig::all_ai(), &mut GameRng::new(seed)).unwrap();

        for (count, picks) in turns {
            if session.is_over() {
                break;
            }
            if session.current_role() == Role::ClueGiver {
                session = apply_clue_move(&session, &ClueMove::new("hint", count, "")).unwrap();
            }

            let team = session.current_team();
            let allowance = session.active_clue().unwrap().guess_allowance();
            let used_before = session.guesses_this_turn();
            let before = revealed_flags(&session);
            let guesses = words_for(&session, &picks);

            let (next, report) = resolve_guesses(&session, &GuessMove::new(guesses, "")).unwrap();
            let after = revealed_flags(&next);

            // Reveals are monotone and match the report.
            for (was, now) in before.iter().zip(&after) {
                prop_assert!(!was || *now);
            }
            let newly = before.iter().zip(&after).filter(|(was, now)| !**was && **now).count();
            prop_assert_eq!(newly, report.revealed.len());
            prop_assert!(newly <= picks.len());

            // The bonus-guess cap holds across the whole turn.
            let used = used_before + u32::try_from(newly).unwrap();
            prop_assert!(used <= allowance, "used {} of {} guesses", used, allowance);

            // Counters mirror the board.
            for t in Team::ALL {
                prop_assert_eq!(next.remaining(t), next.board().unrevealed(CardColor::from(t)));
            }

            // Only the latest batch is flagged.
            let flagged = next.board().iter().filter(|card| card.just_revealed).count();
            prop_assert_eq!(flagged, newly);

            // Every batch is narrated, attributed to the guesser.
            prop_assert_eq!(next.transcript().len(), session.transcript().len() + 1);
            prop_assert_eq!(next.transcript().last().unwrap().seat, session.current_seat());

            match next.winner() {
                Some(_) => {
                    let last = report.revealed.last().map(|r| r.color);
                    let exhausted = next.remaining(Team::Red) == 0 || next.remaining(Team::Blue) == 0;
                    let decisive = last == Some(CardColor::Assassin) || (last.is_some() && exhausted);
                    prop_assert!(decisive, "win without an assassin or an exhausted team");
                }
                None if report.turn_ended => {
                    prop_assert_eq!(next.current_team(), team.other());
                    prop_assert_eq!(next.current_role(), Role::ClueGiver);
                    prop_assert!(next.active_clue().is_none());
                }
                None => {
                    prop_assert_eq!(next.current_team(), team);
                    prop_assert_eq!(next.current_role(), Role::Guesser);
                    prop_assert!(report.revealed.iter().all(|r| r.color == CardColor::from(team)));
                }
            }

            session = next;
        }

        if let Some(winner) = session.winner() {
            let clue = apply_clue_move(&session, &ClueMove::new("late", 1, ""));
            prop_assert_eq!(clue, Err(GameError::GameOver { winner }));
            let guess = resolve_guesses(&session, &GuessMove::pass(""));
            let rejected = matches!(guess, Err(GameError::GameOver { .. }));
            prop_assert!(rejected, "guess accepted after the game ended");
        }
    }

    #[test]
    fn prop_sessions_have_standard_shape(seed in any::<u64>()) {
        let session = create_session(&GameConfig::default(), &SeatConfig::all_ai(), &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(session.board().count(CardColor::Red), 9);
        prop_assert_eq!(session.board().count(CardColor::Blue), 8);
        prop_assert_eq!(session.board().count(CardColor::Assassin), 1);
        prop_assert_eq!(session.board().count(CardColor::Neutral), 7);
        prop_assert!(session.board().iter().all(|card| !card.revealed));
        prop_assert!(session.counters_consistent());
    }
}
