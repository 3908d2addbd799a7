//! The match predicate shared by history queries and generation.
//!
//! Steps run in a fixed order and stop at the first failure. Magnitude and
//! parity filters apply to all four digits jointly: `digit-big` means every
//! digit is 5 or more, not that some position was picked as big.

use super::adjacency::has_consecutive;
use crate::filter::{FilterName, FilterState, ModeSwitch};
use crate::{Digits, Positions, digit_sum};

/// Threshold separating big from small digit sums.
const SUM_BIG_MIN: u8 = 18;

/// Threshold separating big from small digits.
const DIGIT_BIG_MIN: u8 = 5;

/// Evaluate `digits` against per-position constraints and the active filters.
pub fn matches(digits: &Digits, constraints: &Positions, filters: &FilterState) -> bool {
    positions_admit(digits, constraints)
        && triad_admits(digits, filters)
        && magnitude_parity_admits(digits, filters)
        && sum_admits(digit_sum(digits), filters)
        && repetition_admits(digits, filters)
        && adjacency_admits(digits, filters)
}

fn positions_admit(digits: &Digits, constraints: &Positions) -> bool {
    digits.iter().zip(constraints).all(|(d, set)| set.is_empty() || set.contains(*d))
}

fn triad_admits(digits: &Digits, filters: &FilterState) -> bool {
    let (first, last) = (digits[0], digits[3]);
    !(filters.is_active(FilterName::Dragon) && first <= last
        || filters.is_active(FilterName::Tiger) && first >= last
        || filters.is_active(FilterName::Tie) && first != last)
}

fn magnitude_parity_admits(digits: &Digits, filters: &FilterState) -> bool {
    let all = |pred: fn(u8) -> bool| digits.iter().all(|d| pred(*d));
    let checks: [(FilterName, fn(u8) -> bool); 4] = [
        (FilterName::DigitBig, |d| d >= DIGIT_BIG_MIN),
        (FilterName::DigitSmall, |d| d < DIGIT_BIG_MIN),
        (FilterName::DigitOdd, |d| d % 2 == 1),
        (FilterName::DigitEven, |d| d % 2 == 0),
    ];
    checks.into_iter().all(|(name, pred)| !filters.is_active(name) || all(pred))
}

fn sum_admits(sum: u8, filters: &FilterState) -> bool {
    let checks = [
        (FilterName::SumBig, sum >= SUM_BIG_MIN),
        (FilterName::SumSmall, sum < SUM_BIG_MIN),
        (FilterName::SumOdd, sum % 2 == 1),
        (FilterName::SumEven, sum % 2 == 0),
    ];
    checks.into_iter().all(|(name, holds)| !filters.is_active(name) || holds)
}

fn repetition_admits(digits: &Digits, filters: &FilterState) -> bool {
    let mode = filters.mode(ModeSwitch::Repeat);
    let checks: [(FilterName, fn(&Digits) -> bool); 3] = [
        (FilterName::QuadRepeat, is_quad_repeat),
        (FilterName::TripleRepeat, is_triple_repeat),
        (FilterName::PairRepeat, is_pair_repeat),
    ];
    checks.into_iter().all(|(name, detect)| !filters.is_active(name) || mode.admits(detect(digits)))
}

fn adjacency_admits(digits: &Digits, filters: &FilterState) -> bool {
    let mode = filters.mode(ModeSwitch::Adjacency);
    [(FilterName::Adjacent4, 4), (FilterName::Adjacent3, 3), (FilterName::Adjacent2, 2)]
        .into_iter()
        .all(|(name, length)| !filters.is_active(name) || mode.admits(has_consecutive(digits, length)))
}

/// All four digits identical.
pub fn is_quad_repeat(digits: &Digits) -> bool {
    digits.iter().all(|d| *d == digits[0])
}

/// Some digit appears at least three times.
pub fn is_triple_repeat(digits: &Digits) -> bool {
    digits.iter().any(|d| digits.iter().filter(|x| *x == d).count() >= 3)
}

/// Fewer than four distinct digits.
pub fn is_pair_repeat(digits: &Digits) -> bool {
    let mut seen = [false; 10];
    let mut distinct = 0;
    for d in digits {
        let slot = &mut seen[usize::from(*d).min(9)];
        if !*slot {
            *slot = true;
            distinct += 1;
        }
    }
    distinct < 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Mode;
    use crate::{DigitSet, unconstrained};

    fn with(names: &[FilterName]) -> FilterState {
        let mut state = FilterState::new();
        for name in names {
            state.activate(*name);
        }
        state
    }

    fn ok(digits: Digits, state: &FilterState) -> bool {
        matches(&digits, &unconstrained(), state)
    }

    #[test]
    fn position_constraints_only_bind_non_empty_sets() {
        let mut constraints = unconstrained();
        constraints[1] = DigitSet::parse("37");
        let state = FilterState::new();
        assert!(matches(&[0, 3, 9, 9], &constraints, &state));
        assert!(matches(&[5, 7, 0, 1], &constraints, &state));
        assert!(!matches(&[5, 4, 0, 1], &constraints, &state));
    }

    #[test]
    fn triad_compares_first_and_last() {
        assert!(ok([7, 0, 0, 2], &with(&[FilterName::Dragon])));
        assert!(!ok([2, 0, 0, 2], &with(&[FilterName::Dragon])));
        assert!(ok([1, 9, 9, 2], &with(&[FilterName::Tiger])));
        assert!(!ok([3, 9, 9, 2], &with(&[FilterName::Tiger])));
        assert!(ok([4, 1, 2, 4], &with(&[FilterName::Tie])));
        assert!(!ok([4, 1, 2, 5], &with(&[FilterName::Tie])));
    }

    #[test]
    fn magnitude_and_parity_apply_to_every_digit() {
        assert!(ok([5, 6, 7, 9], &with(&[FilterName::DigitBig])));
        assert!(!ok([5, 6, 7, 4], &with(&[FilterName::DigitBig])));
        assert!(ok([0, 1, 2, 4], &with(&[FilterName::DigitSmall])));
        assert!(ok([1, 3, 5, 9], &with(&[FilterName::DigitOdd])));
        assert!(!ok([1, 3, 5, 8], &with(&[FilterName::DigitOdd])));
        assert!(ok([0, 2, 8, 6], &with(&[FilterName::DigitEven])));
        assert!(ok([5, 7, 9, 9], &with(&[FilterName::DigitBig, FilterName::DigitOdd])));
        assert!(!ok([5, 7, 9, 8], &with(&[FilterName::DigitBig, FilterName::DigitOdd])));
    }

    #[test]
    fn sum_filters_split_at_eighteen() {
        assert!(ok([9, 9, 0, 0], &with(&[FilterName::SumBig])));
        assert!(!ok([9, 8, 0, 0], &with(&[FilterName::SumBig])));
        assert!(ok([9, 8, 0, 0], &with(&[FilterName::SumSmall])));
        assert!(ok([1, 0, 0, 0], &with(&[FilterName::SumOdd])));
        assert!(!ok([1, 1, 0, 0], &with(&[FilterName::SumOdd])));
        assert!(ok([0, 0, 0, 0], &with(&[FilterName::SumEven])));
    }

    #[test]
    fn repetition_classes() {
        assert!(is_quad_repeat(&[5, 5, 5, 5]));
        assert!(!is_quad_repeat(&[5, 5, 5, 6]));
        assert!(is_triple_repeat(&[5, 5, 5, 6]));
        assert!(is_triple_repeat(&[1, 0, 1, 1]));
        assert!(!is_triple_repeat(&[1, 1, 2, 2]));
        assert!(is_pair_repeat(&[1, 1, 2, 2]));
        assert!(is_pair_repeat(&[5, 5, 5, 5]));
        assert!(!is_pair_repeat(&[1, 2, 3, 4]));
    }

    #[test]
    fn repetition_respects_mode() {
        let mut state = with(&[FilterName::PairRepeat]);
        assert!(ok([1, 1, 2, 3], &state));
        assert!(!ok([1, 2, 3, 4], &state));

        state.set_mode(ModeSwitch::Repeat, Mode::Exclude);
        assert!(!ok([1, 1, 2, 3], &state));
        assert!(ok([1, 2, 3, 4], &state));
    }

    #[test]
    fn adjacency_respects_mode() {
        let mut state = with(&[FilterName::Adjacent3]);
        assert!(ok([2, 3, 4, 0], &state));
        assert!(!ok([2, 3, 5, 0], &state));

        state.set_mode(ModeSwitch::Adjacency, Mode::Exclude);
        assert!(!ok([2, 3, 4, 0], &state));
        assert!(ok([2, 3, 5, 0], &state));
    }

    #[test]
    fn modes_do_not_leak_between_classes() {
        let mut state = with(&[FilterName::QuadRepeat, FilterName::Adjacent2]);
        state.set_mode(ModeSwitch::Repeat, Mode::Exclude);
        // Not a quad, and has an adjacent pair (include mode for adjacency).
        assert!(ok([1, 2, 7, 7], &state));
        assert!(!ok([7, 7, 7, 7], &state));
        assert!(!ok([1, 3, 7, 7], &state));
    }
}
