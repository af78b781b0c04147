//! Tokenizer for query strings.

use super::error::SyntaxError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Word characters, not starting with a digit
    Ident(String),
    /// Decimal digits
    Int(usize),
    /// Double-quoted literal, already unescaped
    Str(String),
    Dot,
    Comma,
    LBrace,
    RBrace,
    Star,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(s) => write!(f, "{}", s),
            TokenKind::Int(i) => write!(f, "{}", i),
            TokenKind::Str(s) => write!(f, "{}", serde_json::Value::from(s.as_str())),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Comma => write!(f, ","),
            TokenKind::LBrace => write!(f, "{{"),
            TokenKind::RBrace => write!(f, "}}"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Eof => write!(f, "end of query"),
        }
    }
}

/// A token with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Tokenizes the whole input. The last token is always `Eof`.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.next();
            } else {
                break;
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();
        let position = self.position;
        let Some(ch) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                position,
            });
        };

        let kind = match ch {
            '.' | ',' | '{' | '}' | '*' => {
                self.next();
                match ch {
                    '.' => TokenKind::Dot,
                    ',' => TokenKind::Comma,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    _ => TokenKind::Star,
                }
            }
            '"' => TokenKind::Str(self.lex_string()?),
            '0'..='9' => TokenKind::Int(self.lex_int()?),
            c if c.is_alphabetic() || c == '_' => TokenKind::Ident(self.lex_ident()),
            c => {
                return Err(SyntaxError::InvalidSyntax {
                    position,
                    message: format!("unexpected character '{}'", c),
                })
            }
        };

        Ok(Token { kind, position })
    }

    fn lex_ident(&mut self) -> String {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.next();
            } else {
                break;
            }
        }
        self.input[start..self.position].to_string()
    }

    fn lex_int(&mut self) -> Result<usize, SyntaxError> {
        let start = self.position;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.next();
            } else {
                break;
            }
        }
        let digits = &self.input[start..self.position];
        digits
            .parse::<usize>()
            .map_err(|_| SyntaxError::InvalidSyntax {
                position: start,
                message: format!("index too large: {}", digits),
            })
    }

    /// Lexes a double-quoted literal and unescapes it with JSON rules.
    fn lex_string(&mut self) -> Result<String, SyntaxError> {
        let start = self.position;
        self.next();
        loop {
            let ch = match self.next() {
                Some('"') => break,
                Some('\\') => self.next(),
                other => other,
            };
            if ch.is_none() {
                return Err(SyntaxError::UnexpectedEnd {
                    position: start,
                    expected: "closing '\"'".to_string(),
                });
            }
        }
        let raw = &self.input[start..self.position];
        serde_json::from_str::<String>(raw).map_err(|e| SyntaxError::InvalidSyntax {
            position: start,
            message: format!("invalid string literal {}: {}", raw, e),
        })
    }
}
