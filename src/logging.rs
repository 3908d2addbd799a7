//! Logging setup for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job. Levels used by the library:
//!
//! - `warn`: accepted records whose date code is not a calendar date
//! - `info`: ingest totals, archive saves
//! - `debug`: skipped lines, archive loads, query/generation summaries

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human-readable output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// One JSON object per event.
    Json,
}

/// Configuration for the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: LogFormat,
    pub with_ansi: bool,
    /// Let `RUST_LOG` override `level` when it is set.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig { level: LevelFilter::WARN, format: LogFormat::default(), with_ansi: true, use_env_filter: true }
    }
}

impl LogConfig {
    /// Map `-v`/`-q` counts to a level: warn by default, `-v` info, `-vv`
    /// debug, `-vvv` trace, `-q` error, `-qq` off.
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: u8) -> Self {
        let level = match (i16::from(verbose) - i16::from(quiet)).clamp(-2, 3) {
            -2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        LogConfig { level, use_env_filter: verbose == 0 && quiet == 0, ..Default::default() }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry.with(fmt::layer().json().with_writer(io::stderr)).try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().without_time().with_ansi(config.with_ansi).with_writer(io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().without_time().with_target(false).with_ansi(config.with_ansi).with_writer(io::stderr))
            .try_init(),
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(format!("warn,quadsieve={}", config.level));
    if config.use_env_filter { EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()) } else { fallback() }
}
