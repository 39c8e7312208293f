//! Agent identities.

use serde::{Deserialize, Serialize};

/// Stable identifier of an automated agent, e.g. a hosted model id such as
/// `openai/gpt-4o`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl AgentId {
    /// Create an agent ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An agent the transport can route moves to, with display names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Routing identifier.
    pub id: AgentId,
    /// Full display name ("Claude 3.5 Sonnet").
    pub name: String,
    /// Compact display name ("Sonnet 3.5").
    pub short_name: String,
}

impl AgentProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            id: AgentId::new(id),
            name: name.into(),
            short_name: short_name.into(),
        }
    }
}
