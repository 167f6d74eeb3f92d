#![forbid(unsafe_code)]

//! Sort policy and ordering.
//!
//! Exactly one column is active at a time. Clicking the active column flips
//! its direction; clicking another column makes it active in ascending order.
//! The cycle never returns to "unsorted".
//!
//! Ordering is the natural order of each field (lexicographic for names,
//! numeric for numbers). The sort is stable, so equal keys keep source
//! order. Absent or NaN values always sort after present ones, in both
//! directions.

use std::cmp::Ordering;
use std::fmt;

use crate::college::{College, Review};

/// A sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Identifier.
    #[default]
    Id,
    /// Display name.
    Name,
    /// Rating.
    Rating,
    /// Fee amount.
    Fees,
    /// User review.
    Review,
}

impl SortKey {
    /// All keys in column order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Rating,
        SortKey::Fees,
        SortKey::Review,
    ];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Fees => "fees",
            SortKey::Review => "userReview",
        })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Active sort column and direction. Starts as `(Id, Ascending)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortPolicy {
    /// Active column.
    pub key: SortKey,
    /// Direction for the active column.
    pub direction: SortDirection,
}

impl SortPolicy {
    /// A policy on `key` with the given direction.
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header click: same key flips direction, a new key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }

    /// The policy after a click on `key`.
    #[must_use]
    pub fn toggled(mut self, key: SortKey) -> Self {
        self.toggle(key);
        self
    }

    /// Compare two records under this policy.
    pub fn compare(&self, a: &College, b: &College) -> Ordering {
        match self.key {
            SortKey::Id => self.direction.apply(a.id.cmp(&b.id)),
            SortKey::Name => self.direction.apply(a.name.cmp(&b.name)),
            SortKey::Rating => compare_present(
                self.direction,
                number(a.rating),
                number(b.rating),
                f64::total_cmp,
            ),
            SortKey::Fees => compare_present(
                self.direction,
                number(a.fees),
                number(b.fees),
                f64::total_cmp,
            ),
            SortKey::Review => compare_present(
                self.direction,
                a.user_review.as_ref(),
                b.user_review.as_ref(),
                compare_reviews,
            ),
        }
    }
}

/// NaN is as unusable for ordering as a missing value.
fn number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Direction applies to present values only; absent values go last.
fn compare_present<T>(
    direction: SortDirection,
    a: Option<T>,
    b: Option<T>,
    cmp: impl FnOnce(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(cmp(&a, &b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Scores order numerically and before any text review.
fn compare_reviews(a: &&Review, b: &&Review) -> Ordering {
    match (*a, *b) {
        (Review::Score(x), Review::Score(y)) => x.total_cmp(y),
        (Review::Score(_), Review::Text(_)) => Ordering::Less,
        (Review::Text(_), Review::Score(_)) => Ordering::Greater,
        (Review::Text(x), Review::Text(y)) => x.cmp(y),
    }
}

/// Indices of `source` in sorted order. `source` is left untouched.
pub fn sort_indices(source: &[College], policy: SortPolicy) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..source.len()).collect();
    indices.sort_by(|&a, &b| policy.compare(&source[a], &source[b]));
    indices
}

/// References to `source` records in sorted order.
pub fn sort_colleges(source: &[College], policy: SortPolicy) -> Vec<&College> {
    let mut sorted: Vec<&College> = source.iter().collect();
    sorted.sort_by(|a, b| policy.compare(a, b));
    sorted
}
