//! Problem files --- the JSON form in which a knowledge base and a negated conjecture arrive.
//!
//! A problem is an object with exactly two keys, each an array of clause strings:
//!
//! ```json
//! {
//!   "knowledge_base": ["~p(x),q(x)", "p(A)"],
//!   "negated_theorem_predicates": ["~q(A)"]
//! }
//! ```
//!
//! Either array may be empty, though a missing key is an error.

use serde::Deserialize;

use std::path::Path;

use crate::types::err::BuildError;

/// A decoded problem file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    /// The clauses of the knowledge base.
    pub knowledge_base: Vec<String>,

    /// The clauses of the conjecture, already negated.
    pub negated_theorem_predicates: Vec<String>,
}

impl Problem {
    /// Decodes a problem from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::Decode(e.to_string()))
    }

    /// Reads and decodes a problem file.
    pub fn from_path(path: &Path) -> Result<Self, BuildError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| BuildError::Io(e.to_string()))?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_keys_decode() {
        let problem = Problem::from_json(
            r#"{"knowledge_base": ["p(A)"], "negated_theorem_predicates": ["~p(A)"]}"#,
        )
        .unwrap();

        assert_eq!(problem.knowledge_base, vec!["p(A)".to_owned()]);
        assert_eq!(problem.negated_theorem_predicates, vec!["~p(A)".to_owned()]);
    }

    #[test]
    fn empty_lists_are_allowed() {
        let problem = Problem::from_json(
            r#"{"knowledge_base": [], "negated_theorem_predicates": []}"#,
        )
        .unwrap();

        assert!(problem.knowledge_base.is_empty());
        assert!(problem.negated_theorem_predicates.is_empty());
    }

    #[test]
    fn a_missing_key_is_an_error() {
        assert!(matches!(
            Problem::from_json(r#"{"knowledge_base": []}"#),
            Err(BuildError::Decode(_))
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Problem::from_json("knowledge_base:"),
            Err(BuildError::Decode(_))
        ));
    }
}
