//! jsonexplorer - get only the parts of a JSON document matching a query.
//!
//! A query such as `object.*.{name,"last name"}` is parsed once into an
//! immutable AST, evaluated against a decoded document, and the result can
//! be flattened into rows for tabular display.

pub mod config;
pub mod document;
pub mod file;
pub mod output;
pub mod query;
