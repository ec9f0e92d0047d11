//! Grouping and numeric aggregation.
//!
//! `average`, `min`, and `max` are undefined over zero elements and fail with
//! `Error::EmptyInput`, even though the canonical dataset never triggers it.

use crate::common::{Error, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// A group bucket: its key and the members that mapped to it, in input order.
#[derive(Clone, Debug)]
pub struct Group<K, T> {
    pub key: K,
    pub members: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn average(&self, selector: impl FnMut(&T) -> f64) -> Result<f64> {
        average(&self.members, selector)
    }

    pub fn min(&self, selector: impl FnMut(&T) -> f64) -> Result<f64> {
        min(&self.members, selector)
    }

    pub fn max(&self, selector: impl FnMut(&T) -> f64) -> Result<f64> {
        max(&self.members, selector)
    }
}

/// Partitions elements into groups keyed by `key` (i.e. GROUP BY). Groups are
/// emitted in first-occurrence order of their key; members keep input order.
pub fn group_by<T, K, F>(source: impl IntoIterator<Item = T>, mut key: F) -> Vec<Group<K, T>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, T>> = Vec::new();
    for item in source {
        let k = key(&item);
        match index.get(&k) {
            Some(&slot) => groups[slot].members.push(item),
            None => {
                index.insert(k.clone(), groups.len());
                groups.push(Group { key: k, members: vec![item] });
            }
        }
    }
    groups
}

/// The arithmetic mean of the selected values.
pub fn average<T>(items: &[T], mut selector: impl FnMut(&T) -> f64) -> Result<f64> {
    if items.is_empty() {
        return Err(Error::EmptyInput("average over zero elements".to_string()));
    }
    let sum: f64 = items.iter().map(|item| selector(item)).sum();
    Ok(sum / items.len() as f64)
}

/// The smallest selected value, by total order (NaN sorts last).
pub fn min<T>(items: &[T], mut selector: impl FnMut(&T) -> f64) -> Result<f64> {
    items
        .iter()
        .map(|item| selector(item))
        .min_by(f64::total_cmp)
        .ok_or_else(|| Error::EmptyInput("min over zero elements".to_string()))
}

/// The largest selected value, by total order.
pub fn max<T>(items: &[T], mut selector: impl FnMut(&T) -> f64) -> Result<f64> {
    items
        .iter()
        .map(|item| selector(item))
        .max_by(f64::total_cmp)
        .ok_or_else(|| Error::EmptyInput("max over zero elements".to_string()))
}
