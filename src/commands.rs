//! Subcommand implementations.

use crate::cli::{ArchiveDirArgs, GenerateArgs, ImportArgs, QueryArgs};
use crate::report;
use chrono::Local;
use quadsieve::{ArchiveStore, CandidateSpec, DirArchive, Error, Options, Session};
use std::fs;
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Engine(#[from] Error),
}

impl CommandError {
    /// Storage and input-file failures exit with 1, rejected arguments with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Read { .. } | CommandError::Engine(Error::Archive(_)) => 1,
            CommandError::Engine(_) => 2,
        }
    }
}

type CommandResult = Result<(), CommandError>;

fn open_store(args: &ArchiveDirArgs, options: &Options) -> Result<DirArchive, CommandError> {
    Ok(DirArchive::open(&args.archive_dir, &options.archive_extension).map_err(Error::from)?)
}

fn timestamp_key() -> String {
    Local::now().format("%Y%m%d%H%M%S").to_string()
}

pub fn run_import(args: &ImportArgs, options: Options, color: bool) -> CommandResult {
    let mut session = Session::new(options);
    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let text = fs::read_to_string(path).map_err(|source| CommandError::Read { path: path.clone(), source })?;
        reports.push((path.display().to_string(), session.import_text(&text)));
    }
    report::print_import(&reports, color);

    if let Some(key) = &args.save {
        let key = if key.is_empty() { timestamp_key() } else { key.clone() };
        let mut store = open_store(&args.archive, session.options())?;
        session.save_archive(&mut store, &key)?;
        report::print_saved(&key, session.rows().len(), color);
    }
    Ok(())
}

pub fn run_archives(args: &ArchiveDirArgs, options: Options, color: bool) -> CommandResult {
    let store = open_store(args, &options)?;
    let keys = store.keys().map_err(Error::from)?;
    report::print_keys(&keys, color);
    Ok(())
}

pub fn run_query(args: &QueryArgs, options: Options, color: bool) -> CommandResult {
    let store = open_store(&args.archive, &options)?;
    let mut session = Session::new(options);
    session.load_archive(&store, &args.key)?;
    args.filter.apply(&mut session);

    let result = session.query(&args.positions.positions(), &args.bounds());
    report::print_filters(session.filters(), color);
    report::print_query(&result, color);
    Ok(())
}

pub fn run_generate(args: &GenerateArgs, mut options: Options, color: bool) -> CommandResult {
    if let Some(limit) = args.limit {
        options.display_limit = limit;
    }
    let mut spec = CandidateSpec::new(args.positions.positions());
    if let Some(sum) = args.sum {
        spec = spec.with_sum(sum.try_into()?);
    }

    let mut session = Session::new(options);
    args.filter.apply(&mut session);
    let result = session.generate(&spec);
    report::print_filters(session.filters(), color);
    report::print_generation(&result, session.options().display_limit, color);
    Ok(())
}
