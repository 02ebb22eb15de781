//! collection::transform
//!
//! Derivations that build a new collection from the receiver.
//!
//! None of these touch the source. Relative order of surviving elements
//! always matches the source order.

use std::collections::HashMap;
use std::hash::Hash;

use super::Collection;

impl<T> Collection<T> {
    /// Keep the elements for which `predicate` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Drop the elements for which `predicate` holds.
    ///
    /// Equivalent to [`Collection::filter`] with the predicate negated.
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.filter(|item| !predicate(item))
    }

    /// Project every element through `f`. Output length equals input length.
    pub fn map<U, F>(&self, f: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Extract one value per element. Same as [`Collection::map`].
    pub fn pluck<U, F>(&self, f: F) -> Collection<U>
    where
        F: FnMut(&T) -> U,
    {
        self.map(f)
    }

    /// Project every element to a sequence and concatenate the results.
    pub fn flat_map<U, I, F>(&self, f: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(&T) -> I,
    {
        self.iter().flat_map(f).collect()
    }

    /// Left fold over the elements in order.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let product = collection![1, 2, 3, 4, 5].reduce(|acc, n| acc * n, 1);
    /// assert_eq!(product, 120);
    /// ```
    pub fn reduce<U, F>(&self, f: F, initial: U) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.iter().fold(initial, f)
    }

    /// Split into (matching, rest) in a single pass.
    pub fn partition<F>(&self, mut predicate: F) -> (Self, Self)
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut passed = Vec::new();
        let mut failed = Vec::new();
        for item in self.iter() {
            if predicate(item) {
                passed.push(item.clone());
            } else {
                failed.push(item.clone());
            }
        }
        (Self::from_vec(passed), Self::from_vec(failed))
    }

    /// Group elements by a derived key.
    ///
    /// Key iteration order is unspecified. Inside each group elements keep
    /// their source order.
    pub fn group_by<K, F>(&self, mut key: F) -> HashMap<K, Self>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Self> = HashMap::new();
        for item in self.iter() {
            groups.entry(key(item)).or_default().push(item.clone());
        }
        groups
    }

    /// Pair elements position by position, stopping at the shorter input.
    pub fn zip<U>(&self, other: &Collection<U>) -> Collection<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.iter().cloned().zip(other.iter().cloned()).collect()
    }

    /// Concatenate the receiver with each of `others`, in order.
    pub fn merge<'a, I>(&self, others: I) -> Self
    where
        T: Clone + 'a,
        I: IntoIterator<Item = &'a Collection<T>>,
    {
        let mut merged = self.items.clone();
        for other in others {
            merged.extend(other.iter().cloned());
        }
        Self::from_vec(merged)
    }

    /// Render each element with `f` and join with `separator`.
    pub fn join<F>(&self, separator: &str, f: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.iter().map(f).collect::<Vec<_>>().join(separator)
    }
}

impl<T> Collection<T>
where
    T: IntoIterator,
{
    /// Concatenate nested sequences into one collection.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let nested = collection![vec![1, 2], vec![], vec![3]];
    /// assert_eq!(nested.flatten().all(), &[1, 2, 3]);
    /// ```
    pub fn flatten(self) -> Collection<T::Item> {
        self.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    fn people() -> Collection<Person> {
        collection![
            Person { name: "Alice", age: 25 },
            Person { name: "Bob", age: 30 },
            Person { name: "Charlie", age: 25 },
            Person { name: "David", age: 30 },
        ]
    }

    #[test]
    fn filter_keeps_matching() {
        let c = collection![1, 2, 3, 4, 5];
        let evens = c.filter(|n| n % 2 == 0);
        assert_eq!(evens.all(), &[2, 4]);
        assert_eq!(c.count(), 5);
    }

    #[test]
    fn reject_is_negated_filter() {
        let c = collection![1, 2, 3, 4, 5];
        assert_eq!(c.reject(|n| n % 2 == 0).all(), &[1, 3, 5]);
    }

    #[test]
    fn filter_on_empty_is_empty() {
        let c: Collection<i32> = collection![];
        assert!(c.filter(|_| true).is_empty());
    }

    #[test]
    fn map_changes_element_type() {
        let c = collection![1, 2, 3];
        let labels = c.map(|n| format!("#{n}"));
        assert_eq!(labels.all(), &["#1", "#2", "#3"]);
    }

    #[test]
    fn pluck_extracts_field() {
        let names = people().pluck(|p| p.name);
        assert_eq!(names.all(), &["Alice", "Bob", "Charlie", "David"]);
    }

    #[test]
    fn flat_map_concatenates_in_order() {
        let c = collection![1, 2, 3];
        let expanded = c.flat_map(|n| vec![*n; *n as usize]);
        assert_eq!(expanded.all(), &[1, 2, 2, 3, 3, 3]);

        let none = c.flat_map(|_| Vec::<i32>::new());
        assert!(none.is_empty());
    }

    #[test]
    fn reduce_folds_left() {
        let c = collection![1, 2, 3, 4, 5];
        assert_eq!(c.reduce(|acc, n| acc + n, 0), 15);

        let trail = c.reduce(|acc, n| format!("{acc}{n}"), String::from(">"));
        assert_eq!(trail, ">12345");
    }

    #[test]
    fn partition_splits_once() {
        let c = collection![1, 2, 3, 4, 5];
        let (evens, odds) = c.partition(|n| n % 2 == 0);
        assert_eq!(evens.all(), &[2, 4]);
        assert_eq!(odds.all(), &[1, 3, 5]);
    }

    #[test]
    fn group_by_keeps_source_order_within_groups() {
        let groups = people().group_by(|p| p.age);
        assert_eq!(groups.len(), 2);

        let twenty_five: Vec<_> = groups[&25].iter().map(|p| p.name).collect();
        assert_eq!(twenty_five, vec!["Alice", "Charlie"]);
        assert_eq!(groups[&30].count(), 2);
    }

    #[test]
    fn group_by_on_empty_has_no_groups() {
        let c: Collection<Person> = collection![];
        assert!(c.group_by(|p| p.age).is_empty());
    }

    #[test]
    fn zip_truncates_to_shorter() {
        let numbers = collection![1, 2, 3];
        let letters = collection!['a', 'b'];
        assert_eq!(numbers.zip(&letters).all(), &[(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn merge_appends_all() {
        let a = collection![1, 2];
        let b = collection![3];
        let c = collection![4, 5];
        assert_eq!(a.merge([&b, &c]).all(), &[1, 2, 3, 4, 5]);
        assert_eq!(a.all(), &[1, 2]);
    }

    #[test]
    fn join_renders_with_separator() {
        let c = collection![1, 2, 3];
        assert_eq!(c.join(", ", |n| n.to_string()), "1, 2, 3");

        let empty: Collection<i32> = collection![];
        assert_eq!(empty.join(", ", |n| n.to_string()), "");
    }
}
