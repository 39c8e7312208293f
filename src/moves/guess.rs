//! Guesser move payload.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Guesser move: words to reveal, in the order they should be tried.
///
/// Wire shape: `{ "guesses": [string], "reasoning": string }`. An empty
/// list is a pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessMove {
    pub guesses: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
}

impl GuessMove {
    pub fn new<S: Into<String>>(guesses: impl IntoIterator<Item = S>, reasoning: impl Into<String>) -> Self {
        Self {
            guesses: guesses.into_iter().map(Into::into).collect(),
            reasoning: reasoning.into(),
        }
    }

    /// A move that guesses nothing.
    pub fn pass(reasoning: impl Into<String>) -> Self {
        Self::new(Vec::<String>::new(), reasoning)
    }

    /// Parse a guess payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        super::parse_payload(text, "guess move")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_from_json() {
        let mv = GuessMove::from_json(r#"{"guesses": ["WINTER", "spring"], "reasoning": "seasons"}"#)
            .unwrap();
        assert_eq!(mv, GuessMove::new(["WINTER", "spring"], "seasons"));
    }

    #[test]
    fn test_from_json_empty_list_is_pass() {
        let mv = GuessMove::from_json(r#"{"guesses": []}"#).unwrap();
        assert!(mv.guesses.is_empty());
        assert_eq!(mv, GuessMove::pass(""));
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        for text in [
            r#"{"reasoning": "no guesses"}"#,
            r#"{"guesses": "WINTER"}"#,
            r#"{"guesses": [1, 2]}"#,
            r#"[["APPLE", "PEAR"], "why"]"#,
            r#"[[]]"#,
        ] {
            assert!(
                matches!(GuessMove::from_json(text), Err(GameError::Validation(_))),
                "{text}"
            );
        }
    }
}
