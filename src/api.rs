use crate::archive::ArchiveStore;
use crate::engine::{self, Bounds, CandidateSpec, GenerationResult, QueryResult};
use crate::error::Result;
use crate::filter::{FilterChange, FilterName, FilterState, Mode, ModeChange, ModeSwitch};
use crate::ingest::{IngestReport, ingest};
use crate::Positions;
use tracing::info;

/// Default number of generated combinations shown to the user.
pub const DEFAULT_DISPLAY_LIMIT: usize = 1000;

/// Options that affect presentation and storage, never matching semantics.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of generated combinations returned for display.
    pub display_limit: usize,
    /// File extension used by [`DirArchive`](crate::DirArchive).
    pub archive_extension: String,
}

impl Default for Options {
    fn default() -> Self {
        Options { display_limit: DEFAULT_DISPLAY_LIMIT, archive_extension: "txt".to_string() }
    }
}

/// One user session: the loaded rows and the current filter toggles.
///
/// # Example
/// ```
/// use quadsieve::{Bounds, FilterName, Options, Session, unconstrained};
///
/// let mut session = Session::new(Options::default());
/// session.import_text("20240101 001 7002\n20240102 002 1239\n");
/// session.toggle(FilterName::Dragon);
///
/// let result = session.query(&unconstrained(), &Bounds::none());
/// assert_eq!(result.count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    rows: Vec<String>,
    filters: FilterState,
    options: Options,
}

impl Session {
    pub fn new(options: Options) -> Self {
        Session { rows: Vec::new(), filters: FilterState::new(), options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Loaded rows in storage order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn toggle(&mut self, name: FilterName) -> FilterChange {
        self.filters.toggle(name)
    }

    pub fn activate(&mut self, name: FilterName) -> FilterChange {
        self.filters.activate(name)
    }

    pub fn set_mode(&mut self, switch: ModeSwitch, mode: Mode) -> ModeChange {
        self.filters.set_mode(switch, mode)
    }

    /// Parse `text` and append the accepted records as rows.
    pub fn import_text(&mut self, text: &str) -> IngestReport {
        let report = ingest(text);
        self.rows.extend(report.rows());
        report
    }

    /// Replace the loaded rows with the archive stored under `key`.
    ///
    /// On failure the current rows are kept.
    pub fn load_archive(&mut self, store: &dyn ArchiveStore, key: &str) -> Result<usize> {
        let rows = store.load(key)?;
        info!(key, rows = rows.len(), "session rows replaced from archive");
        self.rows = rows;
        Ok(self.rows.len())
    }

    /// Save the loaded rows under `key`.
    pub fn save_archive(&self, store: &mut dyn ArchiveStore, key: &str) -> Result<()> {
        store.save(key, &self.rows)?;
        Ok(())
    }

    /// Range query over the loaded rows with the current filters.
    pub fn query(&self, constraints: &Positions, bounds: &Bounds) -> QueryResult {
        engine::query(&self.rows, constraints, &self.filters, bounds)
    }

    /// Generate candidates with the current filters.
    ///
    /// The result holds every match; use [`GenerationResult::shown`] with
    /// [`Options::display_limit`] to cap what is displayed.
    pub fn generate(&self, spec: &CandidateSpec) -> GenerationResult {
        engine::generate(spec, &self.filters)
    }
}
