//! Abstract syntax tree types for queries.

use std::fmt;

/// Object field access by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyString {
    /// Bare word (`object`)
    Ident(String),
    /// Double-quoted literal (`"last name"`), stored unescaped
    Quoted(String),
}

impl KeyString {
    /// The key used for the object lookup.
    pub fn name(&self) -> &str {
        match self {
            KeyString::Ident(s) | KeyString::Quoted(s) => s,
        }
    }
}

/// Array access by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInt {
    /// A single element (`0`)
    Index(usize),
    /// Every element, as independent branches (`*`)
    Wildcard,
}

/// A single path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Key(KeyString),
    Index(KeyInt),
}

/// `.`-separated segments applied one after another.
///
/// The head is always a plain segment; each following step is a plain
/// segment or a group. `a.b.c` is one chain with steps `[b, c]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub head: Expr,
    pub steps: Vec<ExprList>,
}

/// The universal query step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprList {
    /// `a.b.c`
    Chain(Chain),
    /// `{a,b.c}`: every member applied to the same input
    Group(Vec<ExprList>),
    /// `a`
    Expr(Expr),
}

/// A parsed query. `None` is the empty query, which selects the whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub body: Option<ExprList>,
}

impl Query {
    pub fn new(body: Option<ExprList>) -> Self {
        Self { body }
    }
}

impl fmt::Display for KeyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyString::Ident(s) => write!(f, "{}", s),
            KeyString::Quoted(s) => write!(f, "{}", serde_json::Value::from(s.as_str())),
        }
    }
}

impl fmt::Display for KeyInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyInt::Index(i) => write!(f, "{}", i),
            KeyInt::Wildcard => write!(f, "*"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Key(key) => write!(f, "{}", key),
            Expr::Index(key) => write!(f, "{}", key),
        }
    }
}

impl fmt::Display for ExprList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprList::Chain(chain) => {
                write!(f, "{}", chain.head)?;
                for step in &chain.steps {
                    write!(f, ".{}", step)?;
                }
                Ok(())
            }
            ExprList::Group(members) => {
                write!(f, "{{")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, "}}")
            }
            ExprList::Expr(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            Some(body) => write!(f, "{}", body),
            None => Ok(()),
        }
    }
}
