//! Query language for extracting parts of a JSON document.
//!
//! # Supported Syntax
//!
//! - `name` - Object field (word characters, not starting with a digit)
//! - `"last name"` - Quoted object field (JSON string escapes)
//! - `0` - Array index
//! - `*` - Every array element, each as its own branch
//! - `a.b` - Chain: apply `b` to the result of `a`
//! - `{a,b.c}` - Group: apply every member to the same input
//!
//! # Examples
//!
//! ```
//! use jsonexplorer::document::parser::parse_json;
//! use jsonexplorer::query::{explore, Query};
//!
//! let data = parse_json(r#"{"object": [{"name": "a", "n": 1}, {"name": "b", "n": 2}]}"#).unwrap();
//!
//! let names = explore("object.*.name", &data).unwrap();
//! assert_eq!(names.to_json(), r#"["a","b"]"#);
//!
//! // A parsed query can be reused against other documents.
//! let query = Query::parse("object.0.{name,n}").unwrap();
//! assert_eq!(query.evaluate(&data).unwrap().to_json(), r#"["a",1]"#);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod flatten;
pub mod lexer;
pub mod parser;

pub use ast::{Chain, Expr, ExprList, KeyInt, KeyString, Query};
pub use error::{EvalError, QueryError, SyntaxError};
pub use evaluator::Evaluator;
pub use flatten::{flatten_results, Row};
pub use parser::Parser;

use crate::document::value::Value;

impl Query {
    /// Parses a query string.
    pub fn parse(query: &str) -> Result<Query, SyntaxError> {
        Parser::parse(query)
    }

    /// Evaluates this query against `data`.
    pub fn evaluate(&self, data: &Value) -> Result<Value, EvalError> {
        Evaluator::new(data).evaluate(self)
    }
}

/// Parses `query` and evaluates it against `data` in one go.
pub fn explore(query: &str, data: &Value) -> Result<Value, QueryError> {
    let parsed = Query::parse(query)?;
    Ok(parsed.evaluate(data)?)
}
