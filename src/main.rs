//! jsonlex CLI
//!
//! Prints the token stream of a JSON file.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use jsonlex::config::{ColorMode, LogConfig, LogFormat};
use jsonlex::{
    logging, Config, Diagnostic, IllegalPolicy, LexError, LexResult, SourceLocation, Token, VERSION,
};

#[derive(Parser)]
#[command(name = "jsonlex", version = VERSION, about = "Tokenize JSON and report illegal input")]
struct Cli {
    /// JSON file to tokenize; reads stdin when absent or `-`
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Stop at the first illegal token
    #[arg(short, long)]
    strict: bool,

    /// Log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = LevelArg::Warn)]
    log_level: LevelArg,

    /// Log output format
    #[arg(long, value_enum, default_value_t = FormatArg::Compact)]
    log_format: FormatArg,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Pretty,
    Compact,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl Cli {
    fn config(&self) -> Config {
        let level = match self.log_level {
            LevelArg::Error => tracing::Level::ERROR,
            LevelArg::Warn => tracing::Level::WARN,
            LevelArg::Info => tracing::Level::INFO,
            LevelArg::Debug => tracing::Level::DEBUG,
            LevelArg::Trace => tracing::Level::TRACE,
        };
        let format = match self.log_format {
            FormatArg::Pretty => LogFormat::Pretty,
            FormatArg::Compact => LogFormat::Compact,
            FormatArg::Json => LogFormat::Json,
        };
        let color = match self.color {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        };
        Config {
            log: LogConfig { level, format },
            policy: if self.strict {
                IllegalPolicy::StopAtFirst
            } else {
                IllegalPolicy::Continue
            },
            color,
        }
    }

    /// Display name for diagnostics
    fn source_name(&self) -> String {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();
    config.color.apply();
    logging::init(&config.log);

    match run(&cli, &config) {
        Ok(0) => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprint!("{}", Diagnostic::new(&e));
            process::exit(2);
        }
    }
}

/// Tokenize the input and print the token table.
///
/// Returns the number of illegal tokens seen.
fn run(cli: &Cli, config: &Config) -> LexResult<usize> {
    let input = read_input(cli.file.as_ref())?;
    let name = cli.source_name();
    info!(target: "jsonlex::cli", file = %name, bytes = input.len(), "Tokenizing");

    let tokens = match jsonlex::tokenize(&input, config.policy) {
        Ok(tokens) => tokens,
        Err(LexError::Illegal { literal, location }) => {
            let err = LexError::illegal(literal, location.with_filename(name));
            let source = String::from_utf8_lossy(&input);
            eprint!("{}", Diagnostic::with_source(&err, &source));
            return Ok(1);
        }
        Err(e) => return Err(e),
    };

    print_tokens(&name, &tokens);

    let illegal: Vec<&Token> = tokens.iter().filter(|t| t.is_illegal()).collect();
    if !illegal.is_empty() {
        let source = String::from_utf8_lossy(&input);
        for token in &illegal {
            let location =
                SourceLocation::from_offset(&input, token.span.start, Some(name.clone()));
            let err = LexError::illegal(token.literal.clone(), location);
            eprint!("{}", Diagnostic::with_source(&err, &source));
        }
        eprintln!("{} illegal token(s)", illegal.len());
    }
    debug!(target: "jsonlex::cli", tokens = tokens.len(), illegal = illegal.len(), "Done");
    Ok(illegal.len())
}

fn read_input(file: Option<&PathBuf>) -> LexResult<Vec<u8>> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            fs::read(path).map_err(|e| LexError::io(path, e))
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| LexError::io("<stdin>", e))?;
            Ok(buf)
        }
    }
}

fn print_tokens(name: &str, tokens: &[Token]) {
    println!("Tokens for '{}':", name);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!(
            "{:4}: {:8} {:>6}..{:<6} | {:?}",
            i,
            token.kind.to_string(),
            token.span.start,
            token.span.end,
            token.literal
        );
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());
}
