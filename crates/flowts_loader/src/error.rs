//! Errors raised while decoding interchange input.

use flowts_ast::NodeCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// A `kind` tag outside the closed set for its position.
    #[error("Unrecognized Flow {category}: {tag}")]
    UnrecognizedNodeKind { category: NodeCategory, tag: String },

    #[error("expected a {category} node (a JSON object with a string `kind`)")]
    NotANode { category: NodeCategory },

    #[error("{kind} is missing required field `{field}`")]
    MissingField { kind: &'static str, field: &'static str },

    #[error("field `{field}` of {kind} must be {expected}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// The offending tag, when this is an unrecognized-kind error.
    pub fn unrecognized_tag(&self) -> Option<&str> {
        match self {
            LoadError::UnrecognizedNodeKind { tag, .. } => Some(tag),
            _ => None,
        }
    }
}
