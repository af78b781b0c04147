//! Reading JSON documents from strings, files or stdin.

pub mod loader;
