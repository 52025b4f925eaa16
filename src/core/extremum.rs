use core::fmt;

use serde::{Serialize, Serializer};

use crate::core::rep::AuditFloat;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Extremum {
    AbsMin,
    AbsMax,
    RelMin,
    RelMax,
    CyclesMax,
}

impl Extremum {
    pub const ALL: [Self; 5] = [
        Self::AbsMin,
        Self::AbsMax,
        Self::RelMin,
        Self::RelMax,
        Self::CyclesMax,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Line marker, e.g. `!a<` for a new smallest absolute error.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::AbsMin => "!a<",
            Self::AbsMax => "!a>",
            Self::RelMin => "!r<",
            Self::RelMax => "!r>",
            Self::CyclesMax => "!t>",
        }
    }
}

/// Set of extrema a single sample has just pushed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtremumFlags(u8);

impl ExtremumFlags {
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn contains(self, e: Extremum) -> bool {
        self.0 & e.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, e: Extremum) {
        self.0 |= e.bit();
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// In marker order: `!a<` `!a>` `!r<` `!r>` `!t>`.
    pub fn iter(self) -> impl Iterator<Item = Extremum> {
        Extremum::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

impl FromIterator<Extremum> for ExtremumFlags {
    fn from_iter<I: IntoIterator<Item = Extremum>>(iter: I) -> Self {
        let mut flags = Self::NONE;
        for e in iter {
            flags.insert(e);
        }
        flags
    }
}

/// Space-prefixed markers, ready to append to a record line.
impl fmt::Display for ExtremumFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in self.iter() {
            write!(f, " {}", e.marker())?;
        }
        Ok(())
    }
}

impl Serialize for ExtremumFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(Extremum::marker))
    }
}

/// A running extreme value and the sample index that set it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Extreme<T> {
    pub value: T,
    pub at:    Option<usize>,
}

impl<T> Extreme<T> {
    const fn start(value: T) -> Self {
        Self { value, at: None }
    }
}

/// Running best / worst error terms and worst cycle count of one sweep.
///
/// Minima start at +Inf, maxima at -Inf, so the first retained sample sets all
/// four error extrema. Updates use strict comparisons: repeating a value never
/// fires, and NaN never compares.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ExtremumTracker<F> {
    pub abs_min:    Extreme<F>,
    pub abs_max:    Extreme<F>,
    pub rel_min:    Extreme<F>,
    pub rel_max:    Extreme<F>,
    pub cycles_max: Extreme<u64>,
}

impl<F: AuditFloat> Default for ExtremumTracker<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: AuditFloat> ExtremumTracker<F> {
    pub fn new() -> Self {
        Self {
            abs_min: Extreme::start(F::infinity()),
            abs_max: Extreme::start(F::neg_infinity()),
            rel_min: Extreme::start(F::infinity()),
            rel_max: Extreme::start(F::neg_infinity()),
            cycles_max: Extreme::start(0),
        }
    }

    pub fn update(&mut self, index: usize, abs_err: F, rel_err: F, cycles: u64) -> ExtremumFlags {
        let mut flags = ExtremumFlags::NONE;

        if abs_err < self.abs_min.value {
            self.abs_min = Extreme { value: abs_err, at: Some(index) };
            flags.insert(Extremum::AbsMin);
        }
        if abs_err > self.abs_max.value {
            self.abs_max = Extreme { value: abs_err, at: Some(index) };
            flags.insert(Extremum::AbsMax);
        }

        if rel_err < self.rel_min.value {
            self.rel_min = Extreme { value: rel_err, at: Some(index) };
            flags.insert(Extremum::RelMin);
        }
        if rel_err > self.rel_max.value {
            self.rel_max = Extreme { value: rel_err, at: Some(index) };
            flags.insert(Extremum::RelMax);
        }

        if cycles > self.cycles_max.value {
            self.cycles_max = Extreme { value: cycles, at: Some(index) };
            flags.insert(Extremum::CyclesMax);
        }

        flags
    }
}
