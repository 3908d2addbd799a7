//! Draw records: the canonical form every other module works with.
//!
//! A raw text line goes through [`parse_line`] to become a [`Record`]; a
//! record is rendered with [`Record::to_row`] (or [`format_row`]) into the
//! fixed-width row layout that is both the on-screen listing and the archive
//! file format:
//!
//! ```text
//! 20240101001   3719  小大小大  单单单单
//! └─ date+period, 12 wide ─┘ └ digits ┘ └ size ┘ └ parity ┘
//! ```
//!
//! Fields are separated by exactly two spaces. Readers ([`split_row`]) split
//! on that delimiter and re-derive the digits from the second field, so the
//! layout must not drift.

#[path = "record/format.rs"]
mod format;
#[path = "record/parser.rs"]
mod parser;

pub use format::{format_row, split_row};
pub use parser::parse_line;

use crate::Digits;
use chrono::NaiveDate;

/// Placeholder stored instead of a date-period code when none could be found.
pub const UNKNOWN_DATE_PERIOD: &str = "UNKNOWN";

/// The date-period code of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatePeriod {
    /// An 8-digit date (`YYYYMMDD`) and a 3-digit period number.
    Known { date: String, period: String },
    /// No date-period pattern was present in the source line.
    Unknown,
}

impl DatePeriod {
    /// Build a known code, checking the fixed widths.
    pub fn known(date: &str, period: &str) -> Option<Self> {
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if date.len() == 8 && period.len() == 3 && all_digits(date) && all_digits(period) {
            Some(DatePeriod::Known { date: date.to_string(), period: period.to_string() })
        } else {
            None
        }
    }

    /// The code as stored in rows: `DDDDDDDDPPP` or the sentinel.
    pub fn code(&self) -> String {
        self.to_string()
    }

    pub fn is_known(&self) -> bool {
        matches!(self, DatePeriod::Known { .. })
    }
}

impl std::fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatePeriod::Known { date, period } => write!(f, "{date}{period}"),
            DatePeriod::Unknown => f.write_str(UNKNOWN_DATE_PERIOD),
        }
    }
}

/// A normalized draw entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub date_period: DatePeriod,
    digits: Digits,
}

impl Record {
    /// Create a record; `None` if any digit is outside `0..=9`.
    pub fn new(date_period: DatePeriod, digits: Digits) -> Option<Self> {
        if digits.iter().all(|d| *d <= 9) { Some(Record { date_period, digits }) } else { None }
    }

    pub fn digits(&self) -> &Digits {
        &self.digits
    }

    /// Calendar date of the draw, when the date code is a real date.
    pub fn draw_date(&self) -> Option<NaiveDate> {
        match &self.date_period {
            DatePeriod::Known { date, .. } => NaiveDate::parse_from_str(date, "%Y%m%d").ok(),
            DatePeriod::Unknown => None,
        }
    }

    /// Render this record in the row layout.
    pub fn to_row(&self) -> String {
        format::render(&self.date_period.code(), &self.digits)
    }
}
