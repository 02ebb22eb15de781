//! collection::aggregate
//!
//! Numeric aggregation, quantifiers, uniqueness and set algebra.
//!
//! # Set semantics
//!
//! - [`Collection::diff`] keeps every element of the receiver absent from
//!   the other side, duplicates included.
//! - [`Collection::intersect`] keeps the first occurrence of each receiver
//!   element present on the other side.
//! - [`Collection::union`] is the deduplicated concatenation of both sides.
//!
//! All three compare by `Eq + Hash` and preserve first-occurrence order.
//!
//! ```
//! use pippi::collection;
//!
//! let a = collection![1, 2, 3, 4, 5];
//! let b = collection![4, 5, 6, 7, 8];
//!
//! assert_eq!(a.diff(&b).all(), &[1, 2, 3]);
//! assert_eq!(a.intersect(&b).all(), &[4, 5]);
//! assert_eq!(a.union(&b).all(), &[1, 2, 3, 4, 5, 6, 7, 8]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use super::Collection;

impl<T> Collection<T> {
    /// Sum of `f` over every element. Zero for an empty collection.
    pub fn sum_by<F>(&self, f: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        self.iter().map(f).sum()
    }

    /// Arithmetic mean of `f` over every element.
    ///
    /// An empty collection averages to `0.0`.
    pub fn avg_by<F>(&self, f: F) -> f64
    where
        F: FnMut(&T) -> f64,
    {
        if self.is_empty() {
            return 0.0;
        }
        self.sum_by(f) / self.count() as f64
    }

    /// Element with the smallest projected value. The first one wins ties.
    pub fn min_by<K, F>(&self, f: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.extreme_by(f, |candidate, best| candidate < best)
    }

    /// Element with the largest projected value. The first one wins ties.
    pub fn max_by<K, F>(&self, f: F) -> Option<&T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        self.extreme_by(f, |candidate, best| candidate > best)
    }

    /// Shared scan for min/max; `better` must be strict so earlier elements
    /// keep their place on ties.
    fn extreme_by<K, F, B>(&self, mut f: F, better: B) -> Option<&T>
    where
        F: FnMut(&T) -> K,
        B: Fn(&K, &K) -> bool,
    {
        let mut iter = self.iter();
        let first = iter.next()?;
        let mut best = (first, f(first));
        for item in iter {
            let value = f(item);
            if better(&value, &best.1) {
                best = (item, value);
            }
        }
        Some(best.0)
    }

    /// Keep the first element for each distinct key, in order.
    pub fn unique_by<K, F>(&self, mut key: F) -> Self
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(key(item)))
            .cloned()
            .collect()
    }

    /// True if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// True if any element satisfies `predicate`.
    pub fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// True if every element satisfies `predicate`. Vacuously true when empty.
    pub fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// True if at least one element satisfies `predicate`. False when empty.
    pub fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.contains_where(predicate)
    }
}

impl<T> Collection<T>
where
    T: Clone + Eq + Hash,
{
    /// Drop repeated elements, keeping first occurrences in order.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let c = collection![1, 2, 2, 3, 3, 3, 4];
    /// assert_eq!(c.unique().all(), &[1, 2, 3, 4]);
    /// ```
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }

    /// Elements of the receiver that do not occur anywhere in `other`.
    pub fn diff(&self, other: &Self) -> Self {
        let other: HashSet<&T> = other.iter().collect();
        self.iter()
            .filter(|item| !other.contains(item))
            .cloned()
            .collect()
    }

    /// Distinct elements of the receiver that also occur in `other`.
    pub fn intersect(&self, other: &Self) -> Self {
        let other: HashSet<&T> = other.iter().collect();
        let mut seen = HashSet::new();
        self.iter()
            .filter(|item| other.contains(item) && seen.insert(*item))
            .cloned()
            .collect()
    }

    /// Distinct elements of the receiver followed by distinct new elements of `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut seen = HashSet::new();
        self.iter()
            .chain(other.iter())
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }
}
