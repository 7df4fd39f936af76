//! Sinks for classification events.

use std::fmt;

use cv_types::{CertificateInfo, CertificateMetadata};
use serde::Serialize;

/// Receives the comparator's classification events, in order.
///
/// Implementations decide what to keep: a flat list of pairs, counts, printed
/// rows. They cannot influence the comparison.
pub trait Collector<'a, L, R> {
    /// `left` has no counterpart on the right.
    fn left_only(&mut self, left: &'a L);
    /// `right` has no counterpart on the left.
    fn right_only(&mut self, right: &'a R);
    /// `left` and `right` have equal normalized keys.
    fn matched(&mut self, left: &'a L, right: &'a R);
}

/// Which sides of a [`Pair`] are present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    LeftOnly,
    RightOnly,
    Matched,
}

/// One classified comparison result.
///
/// At least one side is always present; the constructors are the only way to
/// build a pair.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Pair<'a, L, R> {
    left: Option<&'a L>,
    right: Option<&'a R>,
}

/// A classified authority / credential store pair.
pub type CertPair<'a> = Pair<'a, CertificateInfo, CertificateMetadata>;

impl<'a, L, R> Pair<'a, L, R> {
    pub fn left_only(left: &'a L) -> Self {
        Self {
            left: Some(left),
            right: None,
        }
    }

    pub fn right_only(right: &'a R) -> Self {
        Self {
            left: None,
            right: Some(right),
        }
    }

    pub fn matched(left: &'a L, right: &'a R) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn left(&self) -> Option<&'a L> {
        self.left
    }

    pub fn right(&self) -> Option<&'a R> {
        self.right
    }

    pub fn classification(&self) -> Classification {
        match (self.left, self.right) {
            (Some(_), Some(_)) => Classification::Matched,
            (Some(_), None) => Classification::LeftOnly,
            (None, _) => Classification::RightOnly,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.classification() == Classification::Matched
    }
}

impl<L, R> Clone for Pair<'_, L, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, R> Copy for Pair<'_, L, R> {}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Display for Pair<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.left {
            Some(l) => write!(f, " Left:{l:?} ")?,
            None => write!(f, " Left: nil ")?,
        }
        match self.right {
            Some(r) => write!(f, " Right:{r:?} "),
            None => write!(f, " Right: nil "),
        }
    }
}

/// The default collector: a flat, ordered list of pairs.
#[derive(Debug)]
pub struct PairCollector<'a, L, R> {
    pairs: Vec<Pair<'a, L, R>>,
}

impl<'a, L, R> PairCollector<'a, L, R> {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn pairs(&self) -> &[Pair<'a, L, R>] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<Pair<'a, L, R>> {
        self.pairs
    }
}

impl<L, R> Default for PairCollector<'_, L, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, L, R> Collector<'a, L, R> for PairCollector<'a, L, R> {
    fn left_only(&mut self, left: &'a L) {
        self.pairs.push(Pair::left_only(left));
    }

    fn right_only(&mut self, right: &'a R) {
        self.pairs.push(Pair::right_only(right));
    }

    fn matched(&mut self, left: &'a L, right: &'a R) {
        self.pairs.push(Pair::matched(left, right));
    }
}

/// Counts events per classification without keeping the entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationCounts {
    pub left_only: usize,
    pub right_only: usize,
    pub matched: usize,
}

impl ClassificationCounts {
    /// Tally the classifications of already-collected pairs.
    pub fn of<L, R>(pairs: &[Pair<'_, L, R>]) -> Self {
        let mut counts = Self::default();
        for pair in pairs {
            match pair.classification() {
                Classification::LeftOnly => counts.left_only += 1,
                Classification::RightOnly => counts.right_only += 1,
                Classification::Matched => counts.matched += 1,
            }
        }
        counts
    }

    /// Total number of events.
    pub fn total(&self) -> usize {
        self.left_only + self.right_only + self.matched
    }
}

impl<'a, L, R> Collector<'a, L, R> for ClassificationCounts {
    fn left_only(&mut self, _left: &'a L) {
        self.left_only += 1;
    }

    fn right_only(&mut self, _right: &'a R) {
        self.right_only += 1;
    }

    fn matched(&mut self, _left: &'a L, _right: &'a R) {
        self.matched += 1;
    }
}
