mod cli;
mod commands;
mod report;

use clap::Parser;
use quadsieve::Options;
use quadsieve::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};

use crate::cli::{Cli, Command};
use crate::commands::{run_archives, run_generate, run_import, run_query};

fn main() {
    let cli = Cli::parse();
    let color = resolve_color(&cli, io::stdout().is_terminal());

    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet)
        .with_format(cli.log_format.into())
        .with_ansi(resolve_color(&cli, io::stderr().is_terminal()));
    if let Err(err) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(1);
    }

    let options = Options::default();
    let outcome = match &cli.command {
        Command::Import(args) => run_import(args, options, color),
        Command::Archives(args) => run_archives(args, options, color),
        Command::Query(args) => run_query(args, options, color),
        Command::Generate(args) => run_generate(args, options, color),
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn resolve_color(cli: &Cli, is_terminal: bool) -> bool {
    if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        is_terminal
    }
}
