//! Teams, roles, seats, and per-team / per-seat storage.
//!
//! ## Seats
//!
//! A game has exactly four seats: each of the two teams has a clue-giver
//! and a guesser. `Seat::ALL` enumerates them in a fixed order which is
//! also the order agent identities are assigned in.
//!
//! ## TeamMap / SeatMap
//!
//! Fixed-size storage indexed by `Team` or `Seat`, backed by arrays for
//! O(1) access without hashing.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing sides.
///
/// `Red` is conventionally the team that moves first and holds the larger
/// share of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Both teams, in turn order.
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    /// The opposing team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Array index for this team.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "Red"),
            Team::Blue => write!(f, "Blue"),
        }
    }
}

/// The two roles within a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees every card's colour and gives a word + number hint.
    ClueGiver,
    /// Sees only words and reveal state, and guesses from the hint.
    Guesser,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::ClueGiver => write!(f, "clue-giver"),
            Role::Guesser => write!(f, "guesser"),
        }
    }
}

/// A role slot on a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub team: Team,
    pub role: Role,
}

impl Seat {
    /// All four seats in assignment order.
    pub const ALL: [Seat; 4] = [
        Seat::new(Team::Red, Role::ClueGiver),
        Seat::new(Team::Red, Role::Guesser),
        Seat::new(Team::Blue, Role::ClueGiver),
        Seat::new(Team::Blue, Role::Guesser),
    ];

    /// Create a seat.
    #[must_use]
    pub const fn new(team: Team, role: Role) -> Self {
        Self { team, role }
    }

    /// Array index for this seat (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        let role = match self.role {
            Role::ClueGiver => 0,
            Role::Guesser => 1,
        };
        self.team.index() * 2 + role
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.team, self.role)
    }
}

/// Per-team data storage with O(1) access.
///
/// ```
/// use rust_codenames::core::{Team, TeamMap};
///
/// let mut remaining = TeamMap::new(|team| if team == Team::Red { 9 } else { 8 });
/// remaining[Team::Blue] -= 1;
///
/// assert_eq!(remaining[Team::Red], 9);
/// assert_eq!(remaining[Team::Blue], 7);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            data: Team::ALL.map(factory),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (Team, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 4],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: Seat::ALL.map(factory),
        }
    }

    /// Create a map from a fallible factory, stopping at the first error.
    ///
    /// The factory is called in `Seat::ALL` order.
    pub fn try_new<E>(mut factory: impl FnMut(Seat) -> Result<T, E>) -> Result<Self, E> {
        let [a, b, c, d] = Seat::ALL;
        Ok(Self {
            data: [factory(a)?, factory(b)?, factory(c)?, factory(d)?],
        })
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Seat, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        Seat::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_other() {
        assert_eq!(Team::Red.other(), Team::Blue);
        assert_eq!(Team::Blue.other(), Team::Red);
        assert_eq!(format!("{}", Team::Red), "Red");
    }

    #[test]
    fn test_seat_indices_are_distinct() {
        let indices: Vec<_> = Seat::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(
            format!("{}", Seat::new(Team::Blue, Role::Guesser)),
            "Blue guesser"
        );
    }

    #[test]
    fn test_team_map() {
        let mut map = TeamMap::with_value(0u32);
        map[Team::Blue] = 5;

        assert_eq!(map[Team::Red], 0);
        assert_eq!(map[Team::Blue], 5);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Team::Red, &0), (Team::Blue, &5)]);
    }

    #[test]
    fn test_seat_map_factory() {
        let map = SeatMap::new(|seat| seat.index() * 10);

        assert_eq!(map[Seat::new(Team::Red, Role::ClueGiver)], 0);
        assert_eq!(map[Seat::new(Team::Blue, Role::Guesser)], 30);
    }

    #[test]
    fn test_seat_map_try_new_stops_at_error() {
        let mut calls = 0;
        let result: Result<SeatMap<usize>, &str> = SeatMap::try_new(|seat| {
            calls += 1;
            if seat.team == Team::Blue {
                Err("blue")
            } else {
                Ok(seat.index())
            }
        });

        assert_eq!(result, Err("blue"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Team::Red).unwrap(), "\"red\"");
        assert_eq!(
            serde_json::to_string(&Role::ClueGiver).unwrap(),
            "\"clue_giver\""
        );
    }
}
