//! Lexer/Scanner implementation for JSON text
//!
//! This module implements lexical analysis, converting a byte buffer into
//! tokens one call at a time. Malformed input never fails the lexer: it comes
//! back as an [`TokenKind::Illegal`] token carrying the prefix consumed before
//! the production broke.

use tracing::{debug, trace};

use super::classify::{
    is_digit, is_escapable, is_exponent_marker, is_fraction_marker, is_hex_digit,
    is_keyword_start, is_minus, is_sign, is_string_char, is_whitespace,
};
use super::cursor::{Cursor, Decoded};
use super::token::{Span, Token, TokenKind};
use crate::error::{LexError, LexResult, SourceLocation};

/// Outcome of a production scanner: whether the span was legal, and the
/// literal to report
struct Scanned {
    legal: bool,
    literal: String,
}

/// Lexer over a borrowed JSON buffer
pub struct Lexer<'a> {
    input: &'a [u8],
    cursor: Cursor<'a>,
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer, primed with the first code point of `input`
    pub fn new(input: &'a [u8]) -> Self {
        trace!(target: "jsonlex::lexer", "Creating new Lexer over {} bytes", input.len());
        Self {
            input,
            cursor: Cursor::new(input),
            done: false,
        }
    }

    /// Byte offset of the next unread code point
    pub fn offset(&self) -> usize {
        self.cursor.start()
    }

    /// Scan the next token.
    ///
    /// Returns [`TokenKind::EndOfInput`] with an empty literal once the input
    /// is exhausted, and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.cursor.start();
        let token = match self.cursor.current() {
            None => Token::new(TokenKind::EndOfInput, "", Span::new(start, start)),
            Some(c) => {
                let (kind, literal) = if let Some(kind) = TokenKind::structural(c) {
                    (kind, self.current_text())
                } else {
                    match c {
                        '"' => Self::resolve(TokenKind::String, self.scan_string()),
                        c if self.starts_number(c) => {
                            Self::resolve(TokenKind::Number, self.scan_number())
                        }
                        c if is_keyword_start(c) => {
                            let (kind, keyword) = match c {
                                'n' => (TokenKind::Null, "null"),
                                't' => (TokenKind::True, "true"),
                                _ => (TokenKind::False, "false"),
                            };
                            Self::resolve(kind, self.scan_keyword(keyword))
                        }
                        _ => (TokenKind::Illegal, self.current_text()),
                    }
                };
                let span = Span::new(start, self.cursor.offset());
                // Load the lookahead for the next call.
                self.cursor.advance();
                Token::new(kind, literal, span)
            }
        };

        if token.is_illegal() {
            debug!(target: "jsonlex::lexer", literal = ?token.literal, offset = token.span.start, "Illegal token");
        } else {
            debug!(target: "jsonlex::lexer", kind = %token.kind, literal = ?token.literal, start = token.span.start, end = token.span.end, "Token");
        }
        token
    }

    /// Tokenize the whole input, ending with a single `EndOfInput` token.
    /// Illegal tokens are kept in the stream.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return tokens;
            }
        }
    }

    /// Tokenize the whole input, failing on the first illegal token
    pub fn tokenize_strict(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if token.is_illegal() {
                let location = SourceLocation::from_offset(self.input, token.span.start, None);
                return Err(LexError::illegal(token.literal, location));
            }
            let eof = token.is_eof();
            tokens.push(token);
            if eof {
                return Ok(tokens);
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self.cursor.current().is_some_and(is_whitespace) {
            self.cursor.advance();
        }
    }

    fn resolve(kind: TokenKind, scanned: Scanned) -> (TokenKind, String) {
        if scanned.legal {
            (kind, scanned.literal)
        } else {
            (TokenKind::Illegal, scanned.literal)
        }
    }

    fn current_text(&self) -> String {
        self.cursor.slice(self.cursor.start(), self.cursor.offset())
    }

    /// A digit, or `-` immediately followed by a digit
    fn starts_number(&self, c: char) -> bool {
        if is_minus(c) {
            self.cursor.peek().is_some_and(is_digit)
        } else {
            is_digit(c)
        }
    }

    /// Scan a string; the cursor sits on the opening quote.
    ///
    /// The literal is the raw body with escapes left as written. A code point
    /// is consumed only when it continues the body legally, except the one
    /// following a backslash, which is always taken as part of the escape.
    fn scan_string(&mut self) -> Scanned {
        let body = self.cursor.offset();
        let legal = loop {
            match self.cursor.peek_decoded() {
                None => break false,
                // invalid UTF-8 never continues a body
                Some(decoded) if !decoded.valid => break false,
                Some(Decoded { ch: '"', .. }) => {
                    let end = self.cursor.offset();
                    self.cursor.advance();
                    return Scanned {
                        legal: true,
                        literal: self.cursor.slice(body, end),
                    };
                }
                Some(Decoded { ch: '\\', .. }) => {
                    self.cursor.advance();
                    match self.cursor.peek() {
                        None => break false,
                        Some('u') => {
                            self.cursor.advance();
                            if !(0..4).all(|_| self.cursor.advance_if(is_hex_digit)) {
                                break false;
                            }
                        }
                        Some(c) => {
                            self.cursor.advance();
                            if !is_escapable(c) {
                                break false;
                            }
                        }
                    }
                }
                Some(Decoded { ch, .. }) if is_string_char(ch) => self.cursor.advance(),
                // unescaped control character
                Some(_) => break false,
            }
        };
        Scanned {
            legal,
            literal: self.cursor.slice(body, self.cursor.offset()),
        }
    }

    /// Scan a number; the cursor sits on `-` or the first digit.
    ///
    /// `-`? digits (`.` digits)? ([eE] [+-]? digits)?
    fn scan_number(&mut self) -> Scanned {
        let start = self.cursor.start();
        self.cursor.advance_while(is_digit);

        let legal = match self.cursor.peek() {
            Some(c) if is_fraction_marker(c) => {
                self.cursor.advance();
                self.scan_digits() && (!self.eat_exponent_marker() || self.scan_exponent())
            }
            Some(c) if is_exponent_marker(c) => {
                self.cursor.advance();
                self.scan_exponent()
            }
            _ => true,
        };
        Scanned {
            legal,
            literal: self.cursor.slice(start, self.cursor.offset()),
        }
    }

    /// At least one digit, then as many as follow
    fn scan_digits(&mut self) -> bool {
        if !self.cursor.advance_if(is_digit) {
            return false;
        }
        self.cursor.advance_while(is_digit);
        true
    }

    fn eat_exponent_marker(&mut self) -> bool {
        self.cursor.advance_if(is_exponent_marker)
    }

    /// Exponent after its marker: optional sign, then digits
    fn scan_exponent(&mut self) -> bool {
        self.cursor.advance_if(is_sign);
        self.scan_digits()
    }

    /// Match the rest of `keyword`; the cursor sits on its first letter.
    ///
    /// A mismatching code point is left unconsumed, so the literal is exactly
    /// the prefix that matched.
    fn scan_keyword(&mut self, keyword: &str) -> Scanned {
        let start = self.cursor.start();
        let legal = keyword
            .chars()
            .skip(1)
            .all(|expected| self.cursor.advance_if(|c| c == expected));
        Scanned {
            legal,
            literal: self.cursor.slice(start, self.cursor.offset()),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Every token before `EndOfInput`
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.done = true;
            return None;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
