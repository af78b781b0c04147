//! Document model: the JSON value tree that queries run against.

pub mod parser;
pub mod value;

pub use value::{Number, Value};
