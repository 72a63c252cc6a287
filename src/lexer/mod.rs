//! Lexical analysis module
//!
//! This module handles tokenization of JSON text.

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::Cursor;
pub use scanner::Lexer;
pub use token::{Span, Token, TokenKind};
