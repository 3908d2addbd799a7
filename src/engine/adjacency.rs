//! Consecutive-digit detection.
//!
//! A run is "adjacent" when its digits climb by exactly one (`3 4 5`). On top
//! of that, a handful of sequences crossing 9→0 count as adjacent because the
//! digit wheel is circular. Those are listed verbatim rather than computed;
//! the tables mix ascending (`8901`) and descending (`9876`) forms.

/// Wrapped runs of length 3.
static WRAPAROUND_3: [&str; 4] = ["890", "901", "987", "098"];

/// Wrapped runs of length 4.
static WRAPAROUND_4: [&str; 4] = ["7890", "8901", "9876", "0987"];

fn wraparound_table(length: usize) -> Option<&'static [&'static str]> {
    match length {
        3 => Some(&WRAPAROUND_3[..]),
        4 => Some(&WRAPAROUND_4[..]),
        _ => None,
    }
}

/// True if `digits` contains a `length`-long ascending run of consecutive
/// values, or the whole sequence is one of the wrapped runs for `length`.
///
/// ```
/// use quadsieve::has_consecutive;
///
/// assert!(has_consecutive(&[5, 3, 4, 1], 2));
/// assert!(has_consecutive(&[9, 8, 7, 6], 4));
/// assert!(!has_consecutive(&[6, 5, 4, 3], 4));
/// ```
pub fn has_consecutive(digits: &[u8], length: usize) -> bool {
    if length == 0 {
        return false;
    }

    let ascending = digits.windows(length).any(|w| {
        w.iter().enumerate().all(|(j, d)| u8::try_from(j).ok().and_then(|j| w[0].checked_add(j)) == Some(*d))
    });
    if ascending {
        return true;
    }

    let Some(table) = wraparound_table(length) else {
        return false;
    };
    let joined: Option<String> = digits.iter().map(|d| char::from_digit(u32::from(*d), 10)).collect();
    joined.is_some_and(|s| table.contains(&s.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_windows() {
        assert!(has_consecutive(&[1, 2, 3, 4], 4));
        assert!(has_consecutive(&[0, 4, 5, 6], 3));
        assert!(has_consecutive(&[9, 0, 7, 8], 2));
        assert!(!has_consecutive(&[1, 2, 4, 5], 3));
        assert!(!has_consecutive(&[4, 3, 2, 1], 2));
    }

    #[test]
    fn wraparound_four() {
        for seq in [[7, 8, 9, 0], [8, 9, 0, 1], [9, 8, 7, 6], [0, 9, 8, 7]] {
            assert!(has_consecutive(&seq, 4), "{seq:?}");
        }
        assert!(!has_consecutive(&[9, 0, 1, 2], 4));
        assert!(!has_consecutive(&[6, 7, 8, 0], 4));
    }

    #[test]
    fn wraparound_three_compares_the_whole_sequence() {
        assert!(has_consecutive(&[8, 9, 0], 3));
        assert!(has_consecutive(&[0, 9, 8], 3));
        // A wrapped triple inside a longer sequence is not the whole sequence.
        assert!(!has_consecutive(&[8, 9, 0, 5], 3));
    }

    #[test]
    fn two_has_no_wraparound() {
        assert!(!has_consecutive(&[9, 0, 5, 5], 2));
        assert!(!has_consecutive(&[5, 9, 0, 5], 2));
    }

    #[test]
    fn degenerate_lengths() {
        assert!(!has_consecutive(&[1, 2, 3, 4], 0));
        assert!(!has_consecutive(&[1, 2, 3, 4], 5));
        assert!(has_consecutive(&[7], 1));
    }
}
