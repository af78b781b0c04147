//! Error types for query parsing and evaluation.

use thiserror::Error;

/// The query string does not match the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Unexpected token at a specific position.
    #[error("Unexpected token '{found}' at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// Unexpected end of input.
    #[error("Unexpected end of query at position {position}, expected {expected}")]
    UnexpectedEnd { position: usize, expected: String },
    /// Malformed token (bad escape, oversized index, stray character).
    #[error("Invalid query syntax at position {position}: {message}")]
    InvalidSyntax { position: usize, message: String },
}

impl SyntaxError {
    /// Byte offset in the query where the error was detected.
    ///
    /// For an unterminated string this is the opening quote; for any other
    /// premature end it is the length of the query.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnexpectedEnd { position, .. }
            | SyntaxError::InvalidSyntax { position, .. } => *position,
        }
    }
}

/// The query is valid but the data does not have the shape it asks for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Key access on a non-object, or index/wildcard access on a non-array.
    #[error("Cannot apply '{segment}' to a {found} value, expected {expected}")]
    TypeLookup {
        segment: String,
        expected: &'static str,
        found: &'static str,
    },
    /// The object has no such key.
    #[error("Key '{key}' not found")]
    KeyNotFound { key: String },
    /// The index is past the end of the array.
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Any failure of a one-shot parse-and-evaluate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl QueryError {
    /// True when the query itself was malformed, as opposed to the data.
    pub fn is_syntax(&self) -> bool {
        matches!(self, QueryError::Syntax(_))
    }
}
