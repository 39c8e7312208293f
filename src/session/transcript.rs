//! Append-only narration of the moves made in a session.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::agents::SeatOccupant;
use crate::core::{Seat, Team};

/// One narrated move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Seat that made the move.
    pub seat: Seat,
    /// Identity bound to that seat.
    pub occupant: SeatOccupant,
    /// Rationale followed by the clue or guess list.
    pub content: String,
}

impl TranscriptEntry {
    /// Acting team.
    #[must_use]
    pub fn team(&self) -> Team {
        self.seat.team
    }
}

/// Ordered log of transcript entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vector<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push_back(entry);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been narrated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.back()
    }

    /// Iterate in narration order.
    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Entries made by one seat.
    pub fn by_seat(&self, seat: Seat) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter().filter(move |e| e.seat == seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Role;

    fn entry(team: Team, role: Role, content: &str) -> TranscriptEntry {
        TranscriptEntry {
            seat: Seat::new(team, role),
            occupant: SeatOccupant::Human,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(entry(Team::Red, Role::ClueGiver, "first"));
        transcript.push(entry(Team::Red, Role::Guesser, "second"));

        let contents: Vec<_> = transcript.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert_eq!(transcript.last().unwrap().content, "second");
    }

    #[test]
    fn test_snapshots_are_independent() {
        let mut transcript = Transcript::new();
        transcript.push(entry(Team::Blue, Role::ClueGiver, "a"));
        let snapshot = transcript.clone();
        transcript.push(entry(Team::Blue, Role::Guesser, "b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_by_seat() {
        let mut transcript = Transcript::new();
        transcript.push(entry(Team::Red, Role::ClueGiver, "a"));
        transcript.push(entry(Team::Blue, Role::ClueGiver, "b"));
        transcript.push(entry(Team::Red, Role::ClueGiver, "c"));

        let seat = Seat::new(Team::Red, Role::ClueGiver);
        assert_eq!(transcript.by_seat(seat).count(), 2);
        assert!(transcript.by_seat(seat).all(|e| e.team() == Team::Red));
    }
}
