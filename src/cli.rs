//! Command-line argument definitions.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use quadsieve::{Bounds, FilterName, Mode, ModeSwitch, Positions, Session, positions_from_text};
use quadsieve::logging::LogFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadsieve",
    version,
    about = "Query and generate four-digit draws under combinable filters",
    long_about = "Normalize four-digit draw listings into archives, query the history with \
                  position, date/period and pattern filters, and generate candidate combinations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Less log output (-q errors only, -qq silent).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Force ANSI color output.
    #[arg(long, global = true, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable ANSI color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse draw listings, print the normalized rows and optionally archive them.
    Import(ImportArgs),

    /// List the archives stored in a directory.
    Archives(ArchiveDirArgs),

    /// Query an archive under position, date/period and pattern filters.
    Query(QueryArgs),

    /// Generate candidate combinations from per-position digits.
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Args)]
pub struct ArchiveDirArgs {
    /// Directory holding the archive files.
    #[arg(long = "archive-dir", value_name = "DIR", default_value = "archives")]
    pub archive_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Text files with one draw per line (`#` starts a comment).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub archive: ArchiveDirArgs,

    /// Save the accepted rows under this key. Without a value, a timestamp key is used.
    #[arg(long, value_name = "KEY", num_args = 0..=1, default_missing_value = "")]
    pub save: Option<String>,
}

#[derive(Debug, Args)]
pub struct PositionArgs {
    /// Allowed digits for the thousands position.
    #[arg(long, value_name = "DIGITS")]
    pub pos0: Option<String>,
    /// Allowed digits for the hundreds position.
    #[arg(long, value_name = "DIGITS")]
    pub pos1: Option<String>,
    /// Allowed digits for the tens position.
    #[arg(long, value_name = "DIGITS")]
    pub pos2: Option<String>,
    /// Allowed digits for the units position.
    #[arg(long, value_name = "DIGITS")]
    pub pos3: Option<String>,
}

impl PositionArgs {
    pub fn positions(&self) -> Positions {
        positions_from_text([&self.pos0, &self.pos1, &self.pos2, &self.pos3].map(|p| p.as_deref().unwrap_or("")))
    }
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Activate a filter (repeatable), e.g. dragon, sum-big, pair-repeat, 3-adjacent.
    #[arg(long = "filter", value_name = "NAME")]
    pub filters: Vec<FilterName>,

    /// Whether repetition filters keep (include) or drop (exclude) matches.
    #[arg(long = "repeat-mode", value_name = "MODE")]
    pub repeat_mode: Option<Mode>,

    /// Whether adjacency filters keep (include) or drop (exclude) matches.
    #[arg(long = "adjacency-mode", value_name = "MODE")]
    pub adjacency_mode: Option<Mode>,
}

impl FilterArgs {
    /// Apply the requested toggles to `session`, logging what changed.
    pub fn apply(&self, session: &mut Session) {
        for name in &self.filters {
            let change = session.activate(*name);
            for cleared in &change.cleared {
                tracing::warn!(kept = %name, dropped = %cleared, "conflicting filters; the later one wins");
            }
        }
        for (switch, mode) in [(ModeSwitch::Repeat, self.repeat_mode), (ModeSwitch::Adjacency, self.adjacency_mode)] {
            if let Some(mode) = mode {
                session.set_mode(switch, mode);
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub archive: ArchiveDirArgs,

    /// Archive key to query.
    #[arg(long, value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub positions: PositionArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Earliest draw date (YYYYMMDD, inclusive).
    #[arg(long = "date-from", value_name = "YYYYMMDD")]
    pub date_from: Option<String>,
    /// Latest draw date (YYYYMMDD, inclusive).
    #[arg(long = "date-to", value_name = "YYYYMMDD")]
    pub date_to: Option<String>,
    /// Lowest period number (zero-padded, inclusive).
    #[arg(long = "period-from", value_name = "PPP")]
    pub period_from: Option<String>,
    /// Highest period number (zero-padded, inclusive).
    #[arg(long = "period-to", value_name = "PPP")]
    pub period_to: Option<String>,
}

impl QueryArgs {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            period_from: self.period_from.clone(),
            period_to: self.period_to.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub positions: PositionArgs,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Keep only combinations whose digits add up to this value (0-36).
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub sum: Option<i64>,

    /// Maximum number of combinations to print (the total is always reported).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}
