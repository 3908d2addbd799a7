extern crate self as quadsieve;

#[macro_use]
mod macros;
mod api;
mod archive;
mod engine;
mod error;
mod filter;
mod ingest;
mod record;

pub mod logging;

pub use api::{Options, Session};
pub use archive::{ArchiveError, ArchiveStore, DirArchive, MemoryArchive};
pub use engine::{
    Bounds, CandidateSpec, GenerationResult, QueryResult, SumTarget, generate, has_consecutive, is_pair_repeat,
    is_quad_repeat, is_triple_repeat, matches, query, query_records,
};
pub use error::{Error, Result};
pub use filter::{FilterChange, FilterName, FilterSet, FilterState, Mode, ModeChange, ModeSwitch};
pub use ingest::{IngestReport, ingest, strip_comment};
pub use record::{DatePeriod, Record, UNKNOWN_DATE_PERIOD, format_row, parse_line, split_row};

// --- Shared value types -----------------------------------------------------

/// A draw or candidate: four decimal digits, thousands first.
pub type Digits = [u8; 4];

/// Per-position digit constraints (position 0 = thousands).
pub type Positions = [DigitSet; 4];

/// Sum of the four digits (0..=36).
pub fn digit_sum(digits: &Digits) -> u8 {
    digits.iter().sum()
}

/// An ordered set of unique decimal digits.
///
/// Insertion order is kept because generation enumerates candidates in the
/// order the user typed them. The empty set means "unconstrained" for
/// matching and "held at zero" for generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    digits: Vec<u8>,
}

impl DigitSet {
    /// Create an empty set.
    pub fn empty() -> Self {
        DigitSet { digits: Vec::new() }
    }

    /// Build a set from free text, keeping only digit characters.
    ///
    /// Duplicates collapse to their first occurrence, so `"3a13"` becomes `[3, 1]`.
    pub fn parse(text: &str) -> Self {
        let mut set = DigitSet::empty();
        for c in text.chars() {
            if let Some(d) = c.to_digit(10) {
                set.insert(d as u8);
            }
        }
        set
    }

    /// Append `digit` unless it is already present or not a decimal digit.
    pub fn insert(&mut self, digit: u8) -> bool {
        if digit > 9 || self.digits.contains(&digit) {
            return false;
        }
        self.digits.push(digit);
        true
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied()
    }
}

impl FromIterator<u8> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = DigitSet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl std::fmt::Display for DigitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for d in &self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Positions with no constraints at all.
pub fn unconstrained() -> Positions {
    Default::default()
}

/// Parse four free-text candidate strings into per-position sets.
pub fn positions_from_text<S: AsRef<str>>(texts: [S; 4]) -> Positions {
    texts.map(|t| DigitSet::parse(t.as_ref()))
}

/// Render digits as the four-character string used in rows and tables.
pub fn digits_to_string(digits: &Digits) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
