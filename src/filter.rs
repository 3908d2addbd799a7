//! Filter toggles and their mutual-exclusion rules.
//!
//! Seventeen boolean filters live in a [`FilterSet`] bitmask; two mode
//! switches decide whether the repetition and adjacency filters select or
//! reject the matching draws. Some filters oppose each other (big/small,
//! odd/even, ...); activating one member of such a group clears the rest, so
//! a group never has more than one active member.
//!
//! State changes are reported back as plain values ([`FilterChange`],
//! [`ModeChange`]) so a front end can re-render just the affected toggles.

use crate::error::{Error, Result};
use std::str::FromStr;

bitflags::bitflags! {
    /// Set of active boolean filters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FilterSet: u32 {
        const QUAD_REPEAT   = 1 << 0;
        const TRIPLE_REPEAT = 1 << 1;
        const PAIR_REPEAT   = 1 << 2;
        const ADJACENT_4    = 1 << 3;
        const ADJACENT_3    = 1 << 4;
        const ADJACENT_2    = 1 << 5;
        const DIGIT_BIG     = 1 << 6;
        const DIGIT_SMALL   = 1 << 7;
        const DIGIT_ODD     = 1 << 8;
        const DIGIT_EVEN    = 1 << 9;
        const DRAGON        = 1 << 10;
        const TIGER         = 1 << 11;
        const TIE           = 1 << 12;
        const SUM_BIG       = 1 << 13;
        const SUM_SMALL     = 1 << 14;
        const SUM_ODD       = 1 << 15;
        const SUM_EVEN      = 1 << 16;
    }
}

/// Mutual-exclusion groups: at most one member of each may be active.
const EXCLUSIVE_GROUPS: [FilterSet; 5] = [
    FilterSet::DIGIT_BIG.union(FilterSet::DIGIT_SMALL),
    FilterSet::DIGIT_ODD.union(FilterSet::DIGIT_EVEN),
    FilterSet::SUM_BIG.union(FilterSet::SUM_SMALL),
    FilterSet::SUM_ODD.union(FilterSet::SUM_EVEN),
    FilterSet::DRAGON.union(FilterSet::TIGER).union(FilterSet::TIE),
];

/// The closed vocabulary of boolean filter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterName {
    QuadRepeat,
    TripleRepeat,
    PairRepeat,
    Adjacent4,
    Adjacent3,
    Adjacent2,
    DigitBig,
    DigitSmall,
    DigitOdd,
    DigitEven,
    Dragon,
    Tiger,
    Tie,
    SumBig,
    SumSmall,
    SumOdd,
    SumEven,
}

impl FilterName {
    pub const ALL: [FilterName; 17] = [
        FilterName::QuadRepeat,
        FilterName::TripleRepeat,
        FilterName::PairRepeat,
        FilterName::Adjacent4,
        FilterName::Adjacent3,
        FilterName::Adjacent2,
        FilterName::DigitBig,
        FilterName::DigitSmall,
        FilterName::DigitOdd,
        FilterName::DigitEven,
        FilterName::Dragon,
        FilterName::Tiger,
        FilterName::Tie,
        FilterName::SumBig,
        FilterName::SumSmall,
        FilterName::SumOdd,
        FilterName::SumEven,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterName::QuadRepeat => "quad-repeat",
            FilterName::TripleRepeat => "triple-repeat",
            FilterName::PairRepeat => "pair-repeat",
            FilterName::Adjacent4 => "4-adjacent",
            FilterName::Adjacent3 => "3-adjacent",
            FilterName::Adjacent2 => "2-adjacent",
            FilterName::DigitBig => "digit-big",
            FilterName::DigitSmall => "digit-small",
            FilterName::DigitOdd => "digit-odd",
            FilterName::DigitEven => "digit-even",
            FilterName::Dragon => "dragon",
            FilterName::Tiger => "tiger",
            FilterName::Tie => "tie",
            FilterName::SumBig => "sum-big",
            FilterName::SumSmall => "sum-small",
            FilterName::SumOdd => "sum-odd",
            FilterName::SumEven => "sum-even",
        }
    }

    /// The bit this name occupies in a [`FilterSet`].
    pub fn flag(self) -> FilterSet {
        FilterSet::from_bits_truncate(1 << self as u32)
    }

    /// The exclusion group containing this name, if any.
    pub fn group(self) -> Option<FilterSet> {
        EXCLUSIVE_GROUPS.iter().copied().find(|g| g.contains(self.flag()))
    }
}

impl std::fmt::Display for FilterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        FilterName::ALL
            .into_iter()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| Error::UnknownFilter(s.to_string()))
    }
}

/// How an active repetition/adjacency filter treats draws with the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Keep only draws that have the property.
    #[default]
    Include,
    /// Drop draws that have the property.
    Exclude,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Include => "include",
            Mode::Exclude => "exclude",
        }
    }

    /// Whether a draw with `holds` for the property survives this mode.
    pub fn admits(self, holds: bool) -> bool {
        match self {
            Mode::Include => holds,
            Mode::Exclude => !holds,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "include" => Ok(Mode::Include),
            "exclude" => Ok(Mode::Exclude),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// The two enum-valued switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeSwitch {
    Repeat,
    Adjacency,
}

impl ModeSwitch {
    pub fn as_str(self) -> &'static str {
        match self {
            ModeSwitch::Repeat => "repeat-mode",
            ModeSwitch::Adjacency => "adjacency-mode",
        }
    }
}

impl FromStr for ModeSwitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repeat-mode" => Ok(ModeSwitch::Repeat),
            "adjacency-mode" => Ok(ModeSwitch::Adjacency),
            _ => Err(Error::UnknownModeSwitch(s.to_string())),
        }
    }
}

/// Outcome of [`FilterState::toggle`] / [`FilterState::activate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    pub name: FilterName,
    /// State of `name` after the call.
    pub active: bool,
    /// Group members that were switched off to make room for `name`.
    pub cleared: Vec<FilterName>,
}

/// Outcome of [`FilterState::set_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub switch: ModeSwitch,
    pub previous: Mode,
    pub current: Mode,
}

/// Current filter configuration for one query/generation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: FilterSet,
    repeat_mode: Mode,
    adjacency_mode: Mode,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState { active: FilterSet::empty(), repeat_mode: Mode::Include, adjacency_mode: Mode::Include }
    }
}

impl FilterState {
    /// All filters off, both modes on `include`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `name`, first clearing the other members of its exclusion group.
    pub fn toggle(&mut self, name: FilterName) -> FilterChange {
        let cleared = self.clear_group_of(name);
        self.active.toggle(name.flag());
        FilterChange { name, active: self.is_active(name), cleared }
    }

    /// Switch `name` on (clearing its group) regardless of its current state.
    pub fn activate(&mut self, name: FilterName) -> FilterChange {
        let cleared = self.clear_group_of(name);
        self.active.insert(name.flag());
        FilterChange { name, active: true, cleared }
    }

    pub fn set_mode(&mut self, switch: ModeSwitch, mode: Mode) -> ModeChange {
        let slot = match switch {
            ModeSwitch::Repeat => &mut self.repeat_mode,
            ModeSwitch::Adjacency => &mut self.adjacency_mode,
        };
        let previous = std::mem::replace(slot, mode);
        ModeChange { switch, previous, current: mode }
    }

    pub fn mode(&self, switch: ModeSwitch) -> Mode {
        match switch {
            ModeSwitch::Repeat => self.repeat_mode,
            ModeSwitch::Adjacency => self.adjacency_mode,
        }
    }

    pub fn is_active(&self, name: FilterName) -> bool {
        self.active.contains(name.flag())
    }

    pub fn active(&self) -> FilterSet {
        self.active
    }

    /// Active names in vocabulary order.
    pub fn active_names(&self) -> Vec<FilterName> {
        FilterName::ALL.into_iter().filter(|n| self.is_active(*n)).collect()
    }

    /// Turn every filter off and restore both modes to `include`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn clear_group_of(&mut self, name: FilterName) -> Vec<FilterName> {
        let Some(group) = name.group() else {
            return Vec::new();
        };
        let others = (self.active & group) - name.flag();
        self.active.remove(others);
        FilterName::ALL.into_iter().filter(|n| others.contains(n.flag())).collect()
    }
}
