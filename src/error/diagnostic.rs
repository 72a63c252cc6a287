//! Diagnostic formatting for illegal input
//!
//! Renders an error with the offending source line and a caret under the
//! column where the illegal token starts.

use super::{LexError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LexError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LexError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source context
    pub fn with_source(error: &'a LexError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error.message()));

        if let Some(location) = self.error.location() {
            output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

            if let Some(source) = self.source {
                output.push_str(&Self::format_source_context(source, location));
            }
        }

        output
    }

    fn format_source_context(source: &str, location: &SourceLocation) -> String {
        if location.line == 0 {
            return String::new();
        }
        let Some(line) = source.lines().nth(location.line - 1) else {
            return String::new();
        };

        let gutter = location.line.to_string().len();
        let mut output = String::new();
        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = gutter).blue().bold(),
            line
        ));
        let padding = " ".repeat(gutter + 3 + location.column.saturating_sub(1));
        output.push_str(&format!("{}{}\n", padding, "^".red().bold()));
        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
