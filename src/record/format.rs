use crate::Digits;

/// Field delimiter inside a row.
pub(crate) const FIELD_SEP: &str = "  ";

/// Width the date-period field is left-justified to.
const CODE_WIDTH: usize = 12;

const BIG: char = '大';
const SMALL: char = '小';
const ODD: char = '单';
const EVEN: char = '双';

/// Render a row from a date-period code and a digit slice.
///
/// Returns `None` unless `digits` holds exactly four decimal digits.
pub fn format_row(date_period: &str, digits: &[u8]) -> Option<String> {
    let digits: Digits = digits.try_into().ok()?;
    if digits.iter().any(|d| *d > 9) {
        return None;
    }
    Some(render(date_period, &digits))
}

pub(super) fn render(date_period: &str, digits: &Digits) -> String {
    let number = crate::digits_to_string(digits);
    let size: String = digits.iter().map(|d| if *d >= 5 { BIG } else { SMALL }).collect();
    let parity: String = digits.iter().map(|d| if d % 2 == 1 { ODD } else { EVEN }).collect();
    format!("{date_period:<CODE_WIDTH$}{FIELD_SEP}{number}{FIELD_SEP}{size}{FIELD_SEP}{parity}")
}

/// Split a row back into its date-period field and digits.
///
/// Empty pieces produced by the left-justification padding are dropped and
/// each piece is trimmed. Returns `None` when the second field is not four
/// ASCII digits.
pub fn split_row(row: &str) -> Option<(&str, Digits)> {
    let mut fields = row.split(FIELD_SEP).map(str::trim).filter(|f| !f.is_empty());
    let code = fields.next()?;
    let number = fields.next()?;

    let bytes = number.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let mut digits = [0u8; 4];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }
    Some((code, digits))
}
