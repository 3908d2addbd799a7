//! Line normalization.
//!
//! Draw listings arrive in many shapes (copied web tables, hand-typed notes,
//! exports with trailing check digits). The parser looks for two things
//! independently:
//!
//! - a date-period code: 8 date digits followed, after optional whitespace, by
//!   3 period digits;
//! - the four drawn digits, preferring a trailing 4-digit token and otherwise
//!   falling back to the digit stream of the whole line.
//!
//! A missing date-period is tolerated (the record keeps the sentinel); missing
//! digits reject the line.

use super::{DatePeriod, Record};
use crate::Digits;

/// Parse one raw line into a record.
///
/// Comment stripping is the caller's job (see [`crate::strip_comment`]).
pub fn parse_line(raw: &str) -> Option<Record> {
    let line = raw.trim();
    if line.is_empty() {
        return None;
    }

    let digits = extract_digits(line)?;
    Record::new(extract_date_period(line), digits)
}

fn extract_date_period(line: &str) -> DatePeriod {
    let re = regex!(r"([0-9]{8})\s*([0-9]{3})");
    re.captures(line)
        .and_then(|caps| DatePeriod::known(caps.get(1)?.as_str(), caps.get(2)?.as_str()))
        .unwrap_or(DatePeriod::Unknown)
}

fn extract_digits(line: &str) -> Option<Digits> {
    if let Some(last) = line.split_whitespace().last() {
        if last.len() == 4 && last.bytes().all(|b| b.is_ascii_digit()) {
            return to_digits(last.bytes().map(|b| b - b'0'));
        }
    }

    let all: Vec<u8> = line.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    let n = all.len();
    match n {
        // The final digit of long digit runs is treated as a trailing extra
        // (check digit or bonus number) and skipped.
        n if n >= 5 => to_digits(all[n - 5..n - 1].iter().copied()),
        4 => to_digits(all.into_iter()),
        _ => None,
    }
}

fn to_digits(iter: impl Iterator<Item = u8>) -> Option<Digits> {
    let collected: Vec<u8> = iter.collect();
    collected.try_into().ok()
}
