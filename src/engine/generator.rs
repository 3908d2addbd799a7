//! Candidate generation.
//!
//! Positions with a non-empty candidate set take part in a cartesian product;
//! positions left empty stay at `0` in every generated sequence. Sequences
//! come out in the order of the caller's candidate lists with the right-most
//! participating position varying fastest.
//!
//! With a sum target, branches whose partial sum can no longer reach the
//! target are cut before they are expanded. The result always carries the
//! full match list and count; any display cap is applied by the caller via
//! [`GenerationResult::shown`].

use super::predicate::matches;
use crate::error::{Error, Result};
use crate::filter::FilterState;
use crate::{DigitSet, Digits, Positions, positions_from_text};
use tracing::debug;

/// Largest possible digit sum.
const MAX_SUM: u8 = 36;

/// A validated digit-sum target in `0..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SumTarget(u8);

impl SumTarget {
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_SUM)
            .map(SumTarget)
            .ok_or(Error::SumOutOfRange(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SumTarget {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        SumTarget::new(value)
    }
}

/// Generation input: per-position candidates plus an optional sum target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSpec {
    pub positions: Positions,
    pub sum_target: Option<SumTarget>,
}

impl CandidateSpec {
    pub fn new(positions: Positions) -> Self {
        CandidateSpec { positions, sum_target: None }
    }

    /// Build from the four free-text candidate fields and an optional sum.
    ///
    /// Text is reduced to its unique digits; an out-of-range sum is an error.
    pub fn from_text<S: AsRef<str>>(texts: [S; 4], sum: Option<i64>) -> Result<Self> {
        let sum_target = sum.map(SumTarget::new).transpose()?;
        Ok(CandidateSpec { positions: positions_from_text(texts), sum_target })
    }

    #[must_use]
    pub fn with_sum(mut self, target: SumTarget) -> Self {
        self.sum_target = Some(target);
        self
    }

    /// Size of the unfiltered search space. Empty positions contribute a
    /// single held zero, so four empty positions give one candidate.
    pub fn search_space(&self) -> usize {
        self.positions.iter().map(DigitSet::len).filter(|n| *n > 0).product()
    }
}

/// Every generated sequence with its digit sum, plus the untruncated total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub combinations: Vec<(Digits, u8)>,
    pub total: usize,
}

impl GenerationResult {
    /// The first `limit` combinations, for display.
    pub fn shown(&self, limit: usize) -> &[(Digits, u8)] {
        &self.combinations[..self.combinations.len().min(limit)]
    }

    pub fn is_truncated(&self, limit: usize) -> bool {
        self.total > limit
    }
}

/// Enumerate every candidate combination that passes the filters.
///
/// Empty positions are held at zero; with no candidates anywhere the only
/// candidate is `0000`, still subject to the sum target and the filters.
pub fn generate(spec: &CandidateSpec, filters: &FilterState) -> GenerationResult {
    let participating: Vec<usize> = (0..4).filter(|p| !spec.positions[*p].is_empty()).collect();

    let mut walk = Walk {
        spec,
        filters,
        participating: &participating,
        target: spec.sum_target.map(SumTarget::get),
        rest_min: suffix_bounds(spec, &participating, |s| s.iter().min()),
        rest_max: suffix_bounds(spec, &participating, |s| s.iter().max()),
        out: Vec::new(),
        pruned: 0,
    };
    walk.descend(0, [0; 4], 0);

    debug!(
        space = spec.search_space(),
        matched = walk.out.len(),
        pruned_branches = walk.pruned,
        "generation finished"
    );
    GenerationResult { total: walk.out.len(), combinations: walk.out }
}

/// For each depth `k`, the min (or max) digit sum still obtainable from
/// participating positions `k..`.
fn suffix_bounds(spec: &CandidateSpec, participating: &[usize], pick: fn(&DigitSet) -> Option<u8>) -> Vec<u8> {
    let mut bounds = vec![0u8; participating.len() + 1];
    for k in (0..participating.len()).rev() {
        bounds[k] = bounds[k + 1] + pick(&spec.positions[participating[k]]).unwrap_or(0);
    }
    bounds
}

struct Walk<'a> {
    spec: &'a CandidateSpec,
    filters: &'a FilterState,
    participating: &'a [usize],
    target: Option<u8>,
    rest_min: Vec<u8>,
    rest_max: Vec<u8>,
    out: Vec<(Digits, u8)>,
    pruned: usize,
}

impl Walk<'_> {
    fn descend(&mut self, depth: usize, digits: Digits, sum: u8) {
        if let Some(target) = self.target {
            if sum + self.rest_min[depth] > target || sum + self.rest_max[depth] < target {
                self.pruned += 1;
                return;
            }
        }

        let Some(&position) = self.participating.get(depth) else {
            if matches(&digits, &self.spec.positions, self.filters) {
                self.out.push((digits, sum));
            }
            return;
        };

        for d in self.spec.positions[position].iter() {
            let mut next = digits;
            next[position] = d;
            self.descend(depth + 1, next, sum + d);
        }
    }
}
