//! Logging setup
//!
//! Installs a `tracing-subscriber` fmt layer. `RUST_LOG` takes precedence
//! over the configured level, e.g. `RUST_LOG=jsonlex::lexer=debug`.

use std::io;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::{LogConfig, LogFormat};

/// Build the filter for `config`, preferring `RUST_LOG` when set
pub fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str().to_lowercase()))
}

/// Initialize the global subscriber. Log lines go to stderr so they never
/// interleave with the token table on stdout.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(config: &LogConfig) -> bool {
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(filter(config)))
        .try_init()
        .is_ok()
}
