//! Seat configuration and occupants.
//!
//! `SeatConfig` is what the team-selection screen produces: for each seat,
//! whether a human or an AI plays it. At session creation each AI seat is
//! bound to a concrete agent identity, producing a `SeatOccupant` per seat
//! that stays fixed for the whole session.

use serde::{Deserialize, Serialize};

use super::pool::AgentPool;
use super::profile::AgentProfile;
use crate::core::{GameRng, Role, Seat, SeatMap, Team};
use crate::error::{GameError, Result};

/// Who plays a seat, before identities are assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatKind {
    Human,
    #[default]
    Ai,
}

/// Seat kinds for one team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeats {
    #[serde(default)]
    pub clue_giver: SeatKind,
    #[serde(default)]
    pub guesser: SeatKind,
}

impl TeamSeats {
    fn get(&self, role: Role) -> SeatKind {
        match role {
            Role::ClueGiver => self.clue_giver,
            Role::Guesser => self.guesser,
        }
    }

    fn get_mut(&mut self, role: Role) -> &mut SeatKind {
        match role {
            Role::ClueGiver => &mut self.clue_giver,
            Role::Guesser => &mut self.guesser,
        }
    }
}

/// Human/AI choice for all four seats. Unspecified seats are AI.
///
/// ```
/// use rust_codenames::agents::{SeatConfig, SeatKind};
/// use rust_codenames::core::{Role, Seat, Team};
///
/// let seats = SeatConfig::from_json(r#"{"red": {"guesser": "human"}}"#).unwrap();
///
/// assert_eq!(seats.kind(Seat::new(Team::Red, Role::Guesser)), SeatKind::Human);
/// assert_eq!(seats.kind(Seat::new(Team::Blue, Role::Guesser)), SeatKind::Ai);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    #[serde(default)]
    pub red: TeamSeats,
    #[serde(default)]
    pub blue: TeamSeats,
}

impl SeatConfig {
    /// Every seat played by an AI.
    #[must_use]
    pub fn all_ai() -> Self {
        Self::default()
    }

    /// One human seat, everything else AI.
    #[must_use]
    pub fn single_human(seat: Seat) -> Self {
        Self::default().with_seat(seat, SeatKind::Human)
    }

    /// Parse from JSON. Omitted teams and seats default to AI.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GameError::configuration(format!("malformed seat config: {e}")))
    }

    /// Set the kind of one seat.
    #[must_use]
    pub fn with_seat(mut self, seat: Seat, kind: SeatKind) -> Self {
        *self.team_mut(seat.team).get_mut(seat.role) = kind;
        self
    }

    /// The kind of a seat.
    #[must_use]
    pub fn kind(&self, seat: Seat) -> SeatKind {
        self.team(seat.team).get(seat.role)
    }

    /// Seats played by AI, in `Seat::ALL` order.
    pub fn ai_seats(&self) -> impl Iterator<Item = Seat> + '_ {
        Seat::ALL
            .into_iter()
            .filter(move |&seat| self.kind(seat) == SeatKind::Ai)
    }

    fn team(&self, team: Team) -> &TeamSeats {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    fn team_mut(&mut self, team: Team) -> &mut TeamSeats {
        match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        }
    }
}

/// The identity bound to a seat for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeatOccupant {
    Human,
    Agent(AgentProfile),
}

impl SeatOccupant {
    /// Check if a human plays this seat.
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, SeatOccupant::Human)
    }

    /// The agent playing this seat, if any.
    #[must_use]
    pub fn agent(&self) -> Option<&AgentProfile> {
        match self {
            SeatOccupant::Human => None,
            SeatOccupant::Agent(profile) => Some(profile),
        }
    }

    /// Name to attribute transcript entries to.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            SeatOccupant::Human => "Human",
            SeatOccupant::Agent(profile) => &profile.name,
        }
    }
}

/// Bind every seat to an occupant.
///
/// AI seats receive distinct agents drawn from `pool`; fails if the pool
/// is smaller than the number of AI seats.
pub fn assign_seats(
    config: &SeatConfig,
    pool: &AgentPool,
    rng: &mut GameRng,
) -> Result<SeatMap<SeatOccupant>> {
    let ai_count = config.ai_seats().count();
    let mut agents = pool.draw(ai_count, rng)?.into_iter();

    SeatMap::try_new(|seat| match config.kind(seat) {
        SeatKind::Human => Ok(SeatOccupant::Human),
        SeatKind::Ai => agents
            .next()
            .map(SeatOccupant::Agent)
            .ok_or_else(|| GameError::configuration(format!("no agent left for {seat}"))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(n: usize) -> AgentPool {
        AgentPool::new(
            (0..n)
                .map(|i| AgentProfile::new(format!("test/{i}"), format!("Agent {i}"), format!("A{i}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_default_is_all_ai() {
        let config = SeatConfig::default();
        assert_eq!(config.ai_seats().count(), 4);
    }

    #[test]
    fn test_single_human() {
        let seat = Seat::new(Team::Red, Role::ClueGiver);
        let config = SeatConfig::single_human(seat);

        assert_eq!(config.kind(seat), SeatKind::Human);
        assert_eq!(config.ai_seats().count(), 3);
        assert!(config.ai_seats().all(|s| s != seat));
    }

    #[test]
    fn test_assign_seats_distinct_agents() {
        let mut rng = GameRng::new(42);
        let seats = assign_seats(&SeatConfig::all_ai(), &pool(4), &mut rng).unwrap();

        let mut ids: Vec<_> = seats
            .iter()
            .map(|(_, o)| o.agent().unwrap().id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn test_assign_seats_humans_need_no_agents() {
        let config = SeatConfig::all_ai()
            .with_seat(Seat::new(Team::Red, Role::ClueGiver), SeatKind::Human)
            .with_seat(Seat::new(Team::Blue, Role::Guesser), SeatKind::Human);
        let mut rng = GameRng::new(1);
        let seats = assign_seats(&config, &pool(2), &mut rng).unwrap();

        assert!(seats[Seat::new(Team::Red, Role::ClueGiver)].is_human());
        assert!(seats[Seat::new(Team::Blue, Role::Guesser)].is_human());
        assert!(seats[Seat::new(Team::Red, Role::Guesser)].agent().is_some());
    }

    #[test]
    fn test_assign_seats_pool_too_small() {
        let mut rng = GameRng::new(1);
        let err = assign_seats(&SeatConfig::all_ai(), &pool(3), &mut rng).unwrap_err();
        assert!(matches!(err, GameError::Configuration(_)));
    }

    #[test]
    fn test_occupant_serde() {
        let human = serde_json::to_value(SeatOccupant::Human).unwrap();
        assert_eq!(human, serde_json::json!({"kind": "human"}));

        let agent = SeatOccupant::Agent(AgentProfile::new("x/y", "X Y", "XY"));
        let value = serde_json::to_value(&agent).unwrap();
        assert_eq!(value["kind"], "agent");
        assert_eq!(value["id"], "x/y");
        assert_eq!(agent.display_name(), "X Y");
    }
}
