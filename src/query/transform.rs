//! Single-input row transforms: filter, project, sort, take, distinct,
//! flatten, and the existential/universal quantifiers.

use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// A sort order direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => f.write_str("asc"),
            Self::Descending => f.write_str("desc"),
        }
    }
}

/// Keeps the elements satisfying the predicate, preserving relative order
/// (i.e. WHERE). Lazy.
pub fn filter<T, P>(source: impl IntoIterator<Item = T>, predicate: P) -> impl Iterator<Item = T>
where
    P: FnMut(&T) -> bool,
{
    source.into_iter().filter(predicate)
}

/// Transforms each element independently, 1:1 and order-preserving
/// (i.e. SELECT). Lazy.
pub fn project<T, U, F>(source: impl IntoIterator<Item = T>, mapper: F) -> impl Iterator<Item = U>
where
    F: FnMut(T) -> U,
{
    source.into_iter().map(mapper)
}

/// Sorts by a derived key (i.e. ORDER BY). The sort is stable in both
/// directions: ties keep their original relative order. Key comparison falls
/// back to equality where no order is defined (e.g. NaN).
pub fn sort_by<T, K, F>(
    source: impl IntoIterator<Item = T>,
    mut key: F,
    direction: Direction,
) -> Vec<T>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut rows: Vec<T> = source.into_iter().collect();
    rows.sort_by(|a, b| {
        let (ka, kb) = (key(a), key(b));
        let ordering = ka.partial_cmp(&kb).unwrap_or(std::cmp::Ordering::Equal);
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
    rows
}

/// Emits the first `n` elements in current order (i.e. LIMIT). Emits fewer
/// when the input runs short; never errors.
pub fn take<T>(source: impl IntoIterator<Item = T>, n: usize) -> impl Iterator<Item = T> {
    source.into_iter().take(n)
}

/// Keeps the first element per distinct key, in original order
/// (i.e. DISTINCT).
pub fn distinct_by<T, K, F>(
    source: impl IntoIterator<Item = T>,
    key: F,
) -> impl Iterator<Item = T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    source.into_iter().unique_by(key)
}

/// Maps each element to a sequence and flattens the results in order
/// (the SelectMany analog).
pub fn flat_map<T, U, I, F>(
    source: impl IntoIterator<Item = T>,
    f: F,
) -> impl Iterator<Item = U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(T) -> I,
{
    source.into_iter().flat_map(f)
}

/// Returns true if any element satisfies the predicate.
pub fn any<T, P>(source: impl IntoIterator<Item = T>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    source.into_iter().any(|item| predicate(&item))
}

/// Returns true if every element satisfies the predicate. Vacuously true on
/// an empty input.
pub fn all<T, P>(source: impl IntoIterator<Item = T>, mut predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    source.into_iter().all(|item| predicate(&item))
}
