//! Configurable pool of agent identities.
//!
//! Sessions draw one identity per AI seat from the pool without
//! replacement, so no two seats in a session share an agent. Tests inject
//! small pools; applications can load one from JSON or use the built-in
//! catalog.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::profile::{AgentId, AgentProfile};
use crate::core::GameRng;
use crate::error::{GameError, Result};

/// Ordered, id-unique set of agent profiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AgentProfile>", into = "Vec<AgentProfile>")]
pub struct AgentPool {
    agents: Vec<AgentProfile>,
}

impl AgentPool {
    /// Create a pool, rejecting duplicate ids.
    pub fn new(agents: Vec<AgentProfile>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for agent in &agents {
            if !seen.insert(&agent.id) {
                return Err(GameError::configuration(format!(
                    "agent '{}' listed more than once",
                    agent.id
                )));
            }
        }
        Ok(Self { agents })
    }

    /// Parse a JSON array of profiles.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| GameError::configuration(format!("malformed agent pool: {e}")))
    }

    /// The catalog of hosted models the game ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let agents = vec![
            AgentProfile::new("openai/gpt-4o", "GPT-4o", "4o"),
            AgentProfile::new("openai/gpt-4o-mini", "GPT-4o mini", "4o mini"),
            AgentProfile::new("openai/o1-mini", "OpenAI o1-mini", "o1 mini"),
            AgentProfile::new("google/gemini-pro-1.5", "Gemini Pro 1.5", "Pro 1.5"),
            AgentProfile::new("google/gemini-flash-1.5", "Gemini Flash 1.5", "Flash 1.5"),
            AgentProfile::new("anthropic/claude-3.5-sonnet", "Claude 3.5 Sonnet", "Sonnet 3.5"),
            AgentProfile::new("anthropic/claude-3-5-haiku", "Claude 3.5 Haiku", "Haiku 3.5"),
            AgentProfile::new("x-ai/grok-2-1212", "Grok 2 1212", "Grok 2"),
            AgentProfile::new("deepseek/deepseek-r1", "DeepSeek R1", "DeepSeek R1"),
        ];
        Self { agents }
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Look up a profile by id.
    #[must_use]
    pub fn get(&self, id: &AgentId) -> Option<&AgentProfile> {
        self.agents.iter().find(|a| &a.id == id)
    }

    /// Iterate over profiles.
    pub fn iter(&self) -> impl Iterator<Item = &AgentProfile> {
        self.agents.iter()
    }

    /// Draw `amount` distinct profiles uniformly without replacement.
    pub fn draw(&self, amount: usize, rng: &mut GameRng) -> Result<Vec<AgentProfile>> {
        if amount > self.agents.len() {
            return Err(GameError::configuration(format!(
                "{} AI seats but only {} agents available",
                amount,
                self.agents.len()
            )));
        }
        Ok(rng
            .sample_indices(self.agents.len(), amount)
            .into_iter()
            .map(|i| self.agents[i].clone())
            .collect())
    }
}

impl TryFrom<Vec<AgentProfile>> for AgentPool {
    type Error = GameError;

    fn try_from(agents: Vec<AgentProfile>) -> Result<Self> {
        Self::new(agents)
    }
}

impl From<AgentPool> for Vec<AgentProfile> {
    fn from(pool: AgentPool) -> Self {
        pool.agents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_pool() -> AgentPool {
        AgentPool::new(vec![
            AgentProfile::new("a/one", "One", "1"),
            AgentProfile::new("a/two", "Two", "2"),
            AgentProfile::new("a/three", "Three", "3"),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtin_ids_unique() {
        let pool = AgentPool::builtin();
        assert_eq!(pool.len(), 9);
        assert!(AgentPool::new(pool.iter().cloned().collect()).is_ok());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = AgentPool::new(vec![
            AgentProfile::new("a/one", "One", "1"),
            AgentProfile::new("a/one", "Again", "1b"),
        ]);
        assert!(matches!(result, Err(GameError::Configuration(_))));
    }

    #[test]
    fn test_draw_without_replacement() {
        let pool = small_pool();
        let mut rng = GameRng::new(42);
        let drawn = pool.draw(3, &mut rng).unwrap();

        let ids: FxHashSet<_> = drawn.iter().map(|a| a.id.clone()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_draw_too_many() {
        let pool = small_pool();
        let mut rng = GameRng::new(42);
        assert!(matches!(
            pool.draw(4, &mut rng),
            Err(GameError::Configuration(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let pool = AgentPool::from_json(
            r#"[{"id": "x/model", "name": "Model X", "short_name": "X"}]"#,
        )
        .unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(&AgentId::new("x/model")).unwrap().name, "Model X");

        let dup = AgentPool::from_json(
            r#"[{"id": "x", "name": "X", "short_name": "X"},
                {"id": "x", "name": "Y", "short_name": "Y"}]"#,
        );
        assert!(matches!(dup, Err(GameError::Configuration(_))));
    }
}
