//! Join operators. Equi-joins and predicate joins are distinct primitives:
//! foreign-key matches hash on the join key, while range conditions (salary
//! bands) and generalized self-joins need an arbitrary binary predicate.

use std::collections::HashMap;
use std::hash::Hash;

/// An inner equi-join. Builds a hash table of rows from the right source
/// keyed on the join value, then probes it with each left row, emitting
/// `combine(l, r)` for every matching pair. Unmatched rows on either side
/// are dropped.
pub fn hash<L, R, K, FL, FR, C, T>(
    left: impl IntoIterator<Item = L>,
    right: impl IntoIterator<Item = R>,
    mut left_key: FL,
    mut right_key: FR,
    mut combine: C,
) -> Vec<T>
where
    K: Eq + Hash,
    FL: FnMut(&L) -> K,
    FR: FnMut(&R) -> K,
    C: FnMut(&L, &R) -> T,
{
    let mut table: HashMap<K, Vec<R>> = HashMap::new();
    for row in right {
        table.entry(right_key(&row)).or_default().push(row);
    }

    let mut joined = Vec::new();
    for left_row in left {
        if let Some(matches) = table.get(&left_key(&left_row)) {
            for right_row in matches {
                joined.push(combine(&left_row, right_row));
            }
        }
    }
    joined
}

/// A nested loop join: the Cartesian product of left and right filtered by an
/// arbitrary binary predicate. Iterates over the right source for every row
/// in the left source, emitting `combine(l, r)` where the predicate holds.
pub fn nested_loop<L, R, P, C, T>(
    left: impl IntoIterator<Item = L>,
    right: impl IntoIterator<Item = R>,
    mut predicate: P,
    mut combine: C,
) -> Vec<T>
where
    P: FnMut(&L, &R) -> bool,
    C: FnMut(&L, &R) -> T,
{
    let right: Vec<R> = right.into_iter().collect();
    let mut joined = Vec::new();
    for left_row in left {
        for right_row in &right {
            if predicate(&left_row, right_row) {
                joined.push(combine(&left_row, right_row));
            }
        }
    }
    joined
}
