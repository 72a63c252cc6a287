//! Token definitions for JSON text
//!
//! This module defines the token kinds produced by lexical analysis and the
//! byte spans they cover in the input.

use std::fmt;

/// A token produced by the [`Lexer`](super::Lexer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Surface text of the token, taken from the input bytes.
    ///
    /// Strings exclude their quotes, `Illegal` carries the consumed prefix and
    /// `EndOfInput` is empty.
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

/// Half-open byte range `start..end` a token consumed in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Token kinds in JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural
    LeftBrace,      // {
    RightBrace,     // }
    LeftBracket,    // [
    RightBracket,   // ]
    Colon,          // :
    Comma,          // ,

    // Values
    String,
    Number,
    True,
    False,
    Null,

    // Special
    Illegal,
    EndOfInput,
}

impl TokenKind {
    /// Structural kind for a single-character token, if `c` is one
    pub const fn structural(c: char) -> Option<Self> {
        match c {
            '{' => Some(Self::LeftBrace),
            '}' => Some(Self::RightBrace),
            '[' => Some(Self::LeftBracket),
            ']' => Some(Self::RightBracket),
            ':' => Some(Self::Colon),
            ',' => Some(Self::Comma),
            _ => None,
        }
    }

    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::LeftBrace
                | Self::RightBrace
                | Self::LeftBracket
                | Self::RightBracket
                | Self::Colon
                | Self::Comma
        )
    }

    /// Whether the kind is a legal scalar value
    pub const fn is_value(&self) -> bool {
        matches!(
            self,
            Self::String | Self::Number | Self::True | Self::False | Self::Null
        )
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::Illegal => "ILLEGAL",
            Self::EndOfInput => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
