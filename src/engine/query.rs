//! Range queries over archive rows.
//!
//! Rows are scanned in storage order and matches are returned in that same
//! order. Date and period bounds are compared as plain strings against fixed
//! slices of the date-period field (the first 8 bytes are the date, the rest
//! the period), so callers must pass zero-padded bounds. A short field is
//! compared as-is: the `UNKNOWN` sentinel is the date `"UNKNOWN"` with an
//! empty period. Only a field that cannot be split on a character boundary
//! is let through unchecked.

use super::predicate::matches;
use crate::filter::FilterState;
use crate::record::{Record, split_row};
use crate::Positions;
use tracing::debug;

/// Width of the date part of a date-period code.
const DATE_WIDTH: usize = 8;

/// Optional inclusive date/period bounds. Empty strings count as "no bound".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bounds {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub period_from: Option<String>,
    pub period_to: Option<String>,
}

impl Bounds {
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether the date-period `code` lies inside every non-empty bound.
    pub fn admits(&self, code: &str) -> bool {
        let split = code.len().min(DATE_WIDTH);
        let Some((date, period)) = code.get(..split).zip(code.get(split..)) else {
            return true;
        };
        within(date, self.date_from.as_deref(), self.date_to.as_deref())
            && within(period, self.period_from.as_deref(), self.period_to.as_deref())
    }

    pub fn is_unbounded(&self) -> bool {
        [&self.date_from, &self.date_to, &self.period_from, &self.period_to]
            .into_iter()
            .all(|b| b.as_deref().is_none_or(str::is_empty))
    }
}

fn within(value: &str, from: Option<&str>, to: Option<&str>) -> bool {
    let above = from.filter(|b| !b.is_empty()).is_none_or(|b| value >= b);
    let below = to.filter(|b| !b.is_empty()).is_none_or(|b| value <= b);
    above && below
}

/// Matching rows in storage order, with their count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub matches: Vec<String>,
    pub count: usize,
}

/// Scan `rows`, keeping those inside `bounds` that pass the predicate.
///
/// Rows whose digit field cannot be recovered are skipped.
pub fn query<S: AsRef<str>>(
    rows: &[S],
    constraints: &Positions,
    filters: &FilterState,
    bounds: &Bounds,
) -> QueryResult {
    let mut matched = Vec::new();
    let mut unreadable = 0usize;

    for row in rows {
        let row = row.as_ref();
        let Some((code, digits)) = split_row(row) else {
            unreadable += 1;
            continue;
        };
        if bounds.admits(code) && matches(&digits, constraints, filters) {
            matched.push(row.to_string());
        }
    }

    debug!(scanned = rows.len(), matched = matched.len(), unreadable, "range query finished");
    QueryResult { count: matched.len(), matches: matched }
}

/// [`query`] over in-memory records, rendering each to its row first.
pub fn query_records(
    records: &[Record],
    constraints: &Positions,
    filters: &FilterState,
    bounds: &Bounds,
) -> QueryResult {
    let rows: Vec<String> = records.iter().map(Record::to_row).collect();
    query(&rows, constraints, filters, bounds)
}
