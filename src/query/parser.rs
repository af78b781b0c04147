//! Recursive-descent parser for query strings.
//!
//! ```text
//! expr_list  := list_req | list | expr
//! list_req   := expr ( "." expr_list )*
//! list       := "{" expr ( "," expr_list )* "}"
//! expr       := key_string | key_int
//! key_string := STRING | IDENT
//! key_int    := INTEGER | "*"
//! ```

use super::ast::{Chain, Expr, ExprList, KeyInt, KeyString, Query};
use super::error::SyntaxError;
use super::lexer::{Lexer, Token, TokenKind};
use log::debug;

const EXPECTED_SEGMENT: &str = "a key, an index or '*'";

/// Deepest allowed `{` nesting; same limit as serde_json's recursion guard.
pub const MAX_NESTING: usize = 128;

/// Parser for query strings.
pub struct Parser {
    tokens: Vec<Token>,
    index: usize,
    depth: usize,
}

impl Parser {
    /// `tokens` must end with `Eof`.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            index: 0,
            depth: 0,
        }
    }

    /// Parses the query string into a `Query`.
    pub fn parse(query: &str) -> Result<Query, SyntaxError> {
        let mut parser = Parser::new(Lexer::tokenize(query)?);
        let parsed = parser.parse_query()?;
        debug!("parsed query {:?} as {:?}", query, parsed);
        Ok(parsed)
    }

    fn parse_query(&mut self) -> Result<Query, SyntaxError> {
        if self.peek() == &TokenKind::Eof {
            return Ok(Query::new(None));
        }
        let body = self.parse_expr_list()?;
        self.expect(TokenKind::Eof, "end of query")?;
        Ok(Query::new(Some(body)))
    }

    fn peek(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current(&self) -> &Token {
        // tokenize always ends with Eof and we never advance past it
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    fn unexpected(&self, expected: &str) -> SyntaxError {
        let token = self.current();
        match &token.kind {
            TokenKind::Eof => SyntaxError::UnexpectedEnd {
                position: token.position,
                expected: expected.to_string(),
            },
            kind => SyntaxError::UnexpectedToken {
                position: token.position,
                found: kind.to_string(),
                expected: expected.to_string(),
            },
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<(), SyntaxError> {
        if self.peek() == &kind {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn parse_expr_list(&mut self) -> Result<ExprList, SyntaxError> {
        if self.peek() == &TokenKind::LBrace {
            self.parse_group()
        } else {
            self.parse_chain()
        }
    }

    /// Parses `expr ("." expr_list)*`, collapsing to a bare `Expr` when no
    /// `.` follows.
    ///
    /// `a.b.c` is kept flat as one chain with steps `[b, c]`, so chain length
    /// never adds recursion depth.
    fn parse_chain(&mut self) -> Result<ExprList, SyntaxError> {
        let head = self.parse_expr()?;
        let mut steps = Vec::new();
        while self.peek() == &TokenKind::Dot {
            self.advance();
            let step = if self.peek() == &TokenKind::LBrace {
                self.parse_group()?
            } else {
                ExprList::Expr(self.parse_expr()?)
            };
            steps.push(step);
        }
        if steps.is_empty() {
            Ok(ExprList::Expr(head))
        } else {
            Ok(ExprList::Chain(Chain { head, steps }))
        }
    }

    /// Parses `"{" expr ("," expr_list)* "}"`.
    fn parse_group(&mut self) -> Result<ExprList, SyntaxError> {
        let open = self.current().position;
        self.expect(TokenKind::LBrace, "'{'")?;
        if self.depth >= MAX_NESTING {
            return Err(SyntaxError::InvalidSyntax {
                position: open,
                message: format!("groups nested deeper than {}", MAX_NESTING),
            });
        }
        self.depth += 1;
        let group = self.parse_group_members();
        self.depth -= 1;
        group
    }

    fn parse_group_members(&mut self) -> Result<ExprList, SyntaxError> {
        let mut members = vec![ExprList::Expr(self.parse_expr()?)];
        while self.peek() == &TokenKind::Comma {
            self.advance();
            members.push(self.parse_expr_list()?);
        }
        self.expect(TokenKind::RBrace, "',' or '}'")?;
        Ok(ExprList::Group(members))
    }

    fn parse_expr(&mut self) -> Result<Expr, SyntaxError> {
        let expr = match self.peek() {
            TokenKind::Ident(name) => Expr::Key(KeyString::Ident(name.clone())),
            TokenKind::Str(text) => Expr::Key(KeyString::Quoted(text.clone())),
            TokenKind::Int(index) => Expr::Index(KeyInt::Index(*index)),
            TokenKind::Star => Expr::Index(KeyInt::Wildcard),
            _ => return Err(self.unexpected(EXPECTED_SEGMENT)),
        };
        self.advance();
        Ok(expr)
    }
}
