//! # jsonlex
//!
//! A strict, single-pass lexer for JSON text:
//! - Grammar-level checking of strings, numbers and `true`/`false`/`null`
//! - Illegal input comes back as tokens, never as a failure of the lexer
//! - Token literals are taken from the input bytes, escapes left undecoded
//!
//! ## Architecture
//!
//! - `lexer`: code-point cursor, character classes, production scanners
//! - `error`: error types and colored diagnostics for callers that stop at
//!   the first illegal token
//! - `config`: run configuration for the command-line tool
//! - `logging`: `tracing` subscriber setup
//!
//! ```
//! use jsonlex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new(br#"{"a": tru"#);
//! let kinds: Vec<_> = lexer.tokenize().into_iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [
//!     TokenKind::LeftBrace,
//!     TokenKind::String,
//!     TokenKind::Colon,
//!     TokenKind::Illegal,
//!     TokenKind::EndOfInput,
//! ]);
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod logging;

// Re-export commonly used types
pub use config::{Config, IllegalPolicy};
pub use error::{Diagnostic, LexError, LexResult, SourceLocation};
pub use lexer::{Lexer, Span, Token, TokenKind};

/// Version of jsonlex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize `input` under `policy`.
///
/// With [`IllegalPolicy::Continue`] every token is returned, illegal ones
/// included, ending with `EndOfInput`. With [`IllegalPolicy::StopAtFirst`]
/// the first illegal token becomes a [`LexError::Illegal`].
pub fn tokenize(input: &[u8], policy: IllegalPolicy) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(input);
    match policy {
        IllegalPolicy::Continue => Ok(lexer.tokenize()),
        IllegalPolicy::StopAtFirst => lexer.tokenize_strict(),
    }
}
