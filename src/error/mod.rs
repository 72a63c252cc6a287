//! Error handling and diagnostics
//!
//! The lexer itself reports malformed input as tokens. The types here are
//! for callers that choose to stop at the first illegal token, and for the
//! command-line tool's file handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::lexer::cursor::code_points;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for jsonlex operations
pub type LexResult<T> = Result<T, LexError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number in code points (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }

    /// Locate a byte offset within `input`.
    ///
    /// Lines break on `\n`. Offsets past the end are clamped to the end.
    pub fn from_offset(input: &[u8], offset: usize, filename: Option<String>) -> Self {
        let before = &input[..offset.min(input.len())];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        // columns count code points the way the lexer decodes them
        let column = code_points(&before[line_start..]).count() + 1;
        Self::new(line, column, filename)
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Main error type for jsonlex
#[derive(Debug, Error)]
pub enum LexError {
    /// An illegal token, for callers that stop at the first one
    #[error("Illegal Token: {literal:?} at {location}")]
    Illegal {
        literal: String,
        location: SourceLocation,
    },
    /// Input could not be read
    #[error("I/O Error: cannot read '{file}': {source}", file = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LexError {
    /// Create a new illegal-token error
    pub fn illegal(literal: impl Into<String>, location: SourceLocation) -> Self {
        Self::Illegal {
            literal: literal.into(),
            location,
        }
    }

    /// Create a new I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::Illegal { .. } => "Illegal Token",
            Self::Io { .. } => "I/O Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Illegal { literal, .. } => format!("unexpected input {literal:?}"),
            Self::Io { path, source } => format!("cannot read '{}': {}", path.display(), source),
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Illegal { location, .. } => Some(location),
            Self::Io { .. } => None,
        }
    }
}
