//! Run configuration for the command-line tool
//!
//! Pure data: the binary fills it from its arguments and hands the pieces to
//! the logging setup and the token printer.

use tracing::Level;

/// What to do once an illegal token shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IllegalPolicy {
    /// Keep lexing and report every illegal token
    #[default]
    Continue,
    /// Stop at the first illegal token
    StopAtFirst,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, colored output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
    /// JSON lines, for tool integration
    Json,
}

/// Whether diagnostics use ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Color when the terminal supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Apply the mode to the `colored` crate's global switch
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::default(),
        }
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log: LogConfig,
    pub policy: IllegalPolicy,
    pub color: ColorMode,
}
