//! Game configuration types.
//!
//! A session is created from:
//! - `BoardLayout`: how many cards of each colour the board holds
//! - `GameConfig`: layout plus the word list, agent pool and starting team
//!
//! Both are plain data with serde derives so they can be loaded from JSON.

use serde::{Deserialize, Serialize};

use super::team::Team;
use crate::agents::AgentPool;
use crate::cards::{CardColor, WordList};
use crate::error::{GameError, Result};

/// Colour distribution of a board.
///
/// The starting team holds one more card than the other team to offset
/// its first-move advantage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Cards belonging to the team that moves first.
    pub starting_team_cards: usize,
    /// Cards belonging to the team that moves second.
    pub other_team_cards: usize,
    /// Cards that lose the game for whoever reveals them.
    pub assassins: usize,
    /// Cards belonging to nobody.
    pub neutrals: usize,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            starting_team_cards: 9,
            other_team_cards: 8,
            assassins: 1,
            neutrals: 7,
        }
    }
}

impl BoardLayout {
    /// Total number of cards on the board.
    #[must_use]
    pub fn total(&self) -> usize {
        self.starting_team_cards + self.other_team_cards + self.assassins + self.neutrals
    }

    /// Number of cards belonging to `team` when `starting_team` moves first.
    #[must_use]
    pub fn cards_for(&self, team: Team, starting_team: Team) -> usize {
        if team == starting_team {
            self.starting_team_cards
        } else {
            self.other_team_cards
        }
    }

    /// The multiset of colours to deal, in a fixed (unshuffled) order.
    #[must_use]
    pub fn color_pool(&self, starting_team: Team) -> Vec<CardColor> {
        let mut pool = Vec::with_capacity(self.total());
        pool.extend(std::iter::repeat(CardColor::from(starting_team)).take(self.starting_team_cards));
        pool.extend(std::iter::repeat(CardColor::from(starting_team.other())).take(self.other_team_cards));
        pool.extend(std::iter::repeat(CardColor::Assassin).take(self.assassins));
        pool.extend(std::iter::repeat(CardColor::Neutral).take(self.neutrals));
        pool
    }

    /// Check that both teams have something to find.
    pub fn validate(&self) -> Result<()> {
        if self.starting_team_cards == 0 || self.other_team_cards == 0 {
            return Err(GameError::configuration(
                "each team needs at least one card on the board",
            ));
        }
        Ok(())
    }
}

/// Complete configuration for creating sessions.
///
/// ## Example
///
/// ```
/// use rust_codenames::agents::AgentPool;
/// use rust_codenames::cards::WordList;
/// use rust_codenames::core::{BoardLayout, GameConfig};
///
/// let config = GameConfig::new(WordList::builtin())
///     .with_agents(AgentPool::builtin())
///     .with_layout(BoardLayout::default());
///
/// assert_eq!(config.layout.total(), 25);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Colour distribution.
    #[serde(default)]
    pub layout: BoardLayout,

    /// Team whose clue-giver moves first.
    #[serde(default = "default_starting_team")]
    pub starting_team: Team,

    /// Identities available to AI seats.
    #[serde(default = "AgentPool::builtin")]
    pub agents: AgentPool,

    /// Words to draw the board from.
    #[serde(default = "WordList::builtin")]
    pub words: WordList,
}

fn default_starting_team() -> Team {
    Team::Red
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(WordList::builtin())
    }
}

impl GameConfig {
    /// Create a configuration with the standard layout and built-in agents.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            layout: BoardLayout::default(),
            starting_team: default_starting_team(),
            agents: AgentPool::builtin(),
            words,
        }
    }

    /// Parse a configuration from JSON. Omitted fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GameError::configuration(format!("malformed game config: {e}")))
    }

    /// Set the board layout.
    #[must_use]
    pub fn with_layout(mut self, layout: BoardLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the agent pool.
    #[must_use]
    pub fn with_agents(mut self, agents: AgentPool) -> Self {
        self.agents = agents;
        self
    }

    /// Set the team that moves first.
    #[must_use]
    pub fn with_starting_team(mut self, team: Team) -> Self {
        self.starting_team = team;
        self
    }

    /// Check that a board can be drawn from this configuration.
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        if self.words.len() < self.layout.total() {
            return Err(GameError::configuration(format!(
                "word list has {} unique words, board needs {}",
                self.words.len(),
                self.layout.total()
            )));
        }
        Ok(())
    }
}
