//! Bulk import of raw draw listings.

use crate::record::{Record, parse_line};
use tracing::{debug, info, warn};

/// Outcome of [`ingest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Parsed records in input order.
    pub records: Vec<Record>,
    /// Non-blank lines that did not yield a record.
    pub skipped: usize,
}

impl IngestReport {
    pub fn accepted(&self) -> usize {
        self.records.len()
    }

    /// Records rendered in the row layout, ready for an archive.
    pub fn rows(&self) -> Vec<String> {
        self.records.iter().map(Record::to_row).collect()
    }
}

/// Drop everything from the first `#` on.
pub fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(before, _)| before)
}

/// Parse every line of `text`, skipping blanks and comments.
///
/// Lines that cannot be parsed are counted, never reported as errors.
pub fn ingest(text: &str) -> IngestReport {
    let mut report = IngestReport::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(record) => {
                if record.date_period.is_known() && record.draw_date().is_none() {
                    warn!(line = idx + 1, code = %record.date_period, "date code is not a calendar date");
                }
                report.records.push(record);
            }
            None => {
                debug!(line = idx + 1, text = line, "skipping line without four digits");
                report.skipped += 1;
            }
        }
    }

    info!(accepted = report.accepted(), skipped = report.skipped, "ingest finished");
    report
}
