//! Data model: histograms, weighted states, and populations.
//!
//! A [`Histogram`] records, for each `i` in `0..target`, how many calendar
//! days are shared by exactly `i` people. It is the only information about a
//! room's history that matters for the future, so histories that agree on it
//! are merged into a single weighted [`State`].

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::constants::DAYS_IN_YEAR;
use crate::error::HistogramError;

/// Exact probability mass.
pub type Probability = BigRational;

/// Exact rational `numer / denom`.
pub fn ratio(numer: u32, denom: u32) -> Probability {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

/// Day-sharing histogram of length `target`.
///
/// Ordered lexicographically over `counts[0], counts[1], ...`, which is the
/// total order the compactor sorts by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Histogram(Box<[u16]>);

impl Histogram {
    /// Histogram of an empty room: every day shared by zero people.
    ///
    /// # Examples
    ///
    /// ```
    /// use birthday_core::types::Histogram;
    /// let h = Histogram::empty_room(3);
    /// assert_eq!(h.counts(), &[365, 0, 0]);
    /// ```
    pub fn empty_room(target: u8) -> Self {
        let mut counts = vec![0u16; usize::from(target)];
        if let Some(first) = counts.first_mut() {
            *first = DAYS_IN_YEAR;
        }
        Self(counts.into_boxed_slice())
    }

    /// Build a histogram from raw counts, checking length and the 365-day total.
    pub fn from_counts(target: u8, counts: &[u16]) -> Result<Self, HistogramError> {
        let expected = usize::from(target);
        if counts.len() != expected {
            return Err(HistogramError::WrongLength {
                expected,
                got: counts.len(),
            });
        }
        let total: u32 = counts.iter().map(|&c| u32::from(c)).sum();
        if total != u32::from(DAYS_IN_YEAR) {
            return Err(HistogramError::WrongTotal {
                expected: u32::from(DAYS_IN_YEAR),
                got: total,
            });
        }
        Ok(Self(counts.into()))
    }

    /// Raw bucket counts; `counts()[i]` is the number of days shared by `i` people.
    pub fn counts(&self) -> &[u16] {
        &self.0
    }

    /// Collision threshold this histogram was built for.
    pub fn target(&self) -> usize {
        self.0.len()
    }

    /// Number of tracked days. Always 365 for a valid histogram.
    pub fn total_days(&self) -> u32 {
        self.0.iter().map(|&c| u32::from(c)).sum()
    }

    /// Number of people accounted for: `sum(i * counts[i])`.
    ///
    /// For a state that has not been absorbed this equals the number of
    /// people admitted so far.
    pub fn occupants(&self) -> u32 {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &c)| i as u32 * u32::from(c))
            .sum()
    }

    /// Move one day from bucket `bucket` to bucket `bucket + 1`.
    ///
    /// Returns `None` if bucket `bucket` is empty or `bucket + 1` is not a
    /// tracked bucket (that move is an absorption, not a successor).
    pub fn promote(&self, bucket: usize) -> Option<Self> {
        if bucket + 1 >= self.0.len() || self.0[bucket] == 0 {
            return None;
        }
        let mut counts = self.0.clone();
        counts[bucket] -= 1;
        counts[bucket + 1] += 1;
        Some(Self(counts))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

/// A histogram together with the probability that the room is in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub histogram: Histogram,
    pub mass: Probability,
}

impl State {
    pub fn new(histogram: Histogram, mass: Probability) -> Self {
        Self { histogram, mass }
    }

    /// The empty room with probability 1.
    pub fn initial(target: u8) -> Self {
        Self::new(Histogram::empty_room(target), Probability::one())
    }
}

/// All tracked states at one iteration, one per distinct histogram, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Population {
    states: Vec<State>,
}

impl Population {
    /// The singleton population before anyone has entered the room.
    pub fn initial(target: u8) -> Self {
        Self {
            states: vec![State::initial(target)],
        }
    }

    /// Wrap states that are already sorted and free of duplicate histograms.
    ///
    /// Only the compactor should produce such a list.
    pub fn from_compacted(states: Vec<State>) -> Self {
        let population = Self { states };
        debug_assert!(population.is_compacted());
        population
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn into_states(self) -> Vec<State> {
        self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Sum of all tracked masses.
    pub fn total_mass(&self) -> Probability {
        self.states
            .iter()
            .fold(Probability::zero(), |acc, s| acc + &s.mass)
    }

    /// True if histograms are strictly increasing, hence unique.
    pub fn is_compacted(&self) -> bool {
        self.states
            .windows(2)
            .all(|pair| pair[0].histogram < pair[1].histogram)
    }

    /// Look up the mass tracked for a histogram.
    pub fn mass_of(&self, histogram: &Histogram) -> Option<&Probability> {
        self.states
            .binary_search_by(|s| s.histogram.cmp(histogram))
            .ok()
            .map(|i| &self.states[i].mass)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
