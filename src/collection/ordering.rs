//! collection::ordering
//!
//! Sorting, positional selection, chunking and random sampling.
//!
//! # Positions
//!
//! Positional arguments are signed. Out-of-range and negative values are
//! clamped, never rejected:
//!
//! - `slice(start, end)` clamps `start` to 0 and `end` to the length;
//!   `start > end` yields an empty collection.
//! - `take(n)` takes from the front for `n >= 0` and from the back for
//!   `n < 0`.
//! - `skip(n)` treats `n < 0` as 0.
//! - `chunk(size)` yields no chunks for `size <= 0`.
//!
//! # Randomness
//!
//! [`Collection::shuffle_with`] and [`Collection::random_with`] draw from
//! a caller-supplied generator so results can be pinned with a seed.
//! [`Collection::shuffle`] and [`Collection::random`] use the thread-local
//! generator.

use std::cmp::Ordering;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::Collection;

/// Clamp a signed position into `0..=len`.
fn clamp_position(position: isize, len: usize) -> usize {
    usize::try_from(position).map_or(0, |position| position.min(len))
}

impl<T: Clone> Collection<T> {
    /// Stable sort by `compare`. Equal elements keep their source order.
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = self.items.clone();
        sorted.sort_by(compare);
        Self::from_vec(sorted)
    }

    /// Stable descending sort: [`Collection::sort_by`] with operands swapped.
    pub fn sort_desc_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by(|a, b| compare(b, a))
    }

    /// Elements from `start` (inclusive) to `end` (exclusive), clamped.
    pub fn slice(&self, start: isize, end: isize) -> Self {
        let len = self.count();
        let end = clamp_position(end, len);
        let start = clamp_position(start, len).min(end);
        Self::from_slice(&self.items[start..end])
    }

    /// First `n` elements, or the last `|n|` elements when `n` is negative.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let c = collection![1, 2, 3, 4, 5];
    /// assert_eq!(c.take(2).all(), &[1, 2]);
    /// assert_eq!(c.take(-2).all(), &[4, 5]);
    /// assert_eq!(c.take(-10).all(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn take(&self, n: isize) -> Self {
        let len = self.count();
        let count = n.unsigned_abs().min(len);
        if n < 0 {
            Self::from_slice(&self.items[len - count..])
        } else {
            Self::from_slice(&self.items[..count])
        }
    }

    /// Everything after the first `n` elements.
    pub fn skip(&self, n: isize) -> Self {
        let start = clamp_position(n, self.count());
        Self::from_slice(&self.items[start..])
    }

    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// Consecutive runs of at most `size` elements; the last may be shorter.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let c = collection![1, 2, 3, 4, 5, 6, 7];
    /// let chunks = c.chunk(3);
    /// assert_eq!(chunks.count(), 3);
    /// assert_eq!(chunks.last().map(|c| c.all()), Some(&[7][..]));
    /// assert!(c.chunk(0).is_empty());
    /// ```
    pub fn chunk(&self, size: isize) -> Collection<Self> {
        match usize::try_from(size) {
            Ok(size) if size > 0 => self.items.chunks(size).map(Self::from_slice).collect(),
            _ => Collection::new(),
        }
    }

    /// Uniformly shuffled copy, drawing from `rng`.
    pub fn shuffle_with<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut shuffled = self.items.clone();
        shuffled.shuffle(rng);
        Self::from_vec(shuffled)
    }

    /// Uniformly shuffled copy using the thread-local generator.
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::rng())
    }
}

impl<T: Clone + Ord> Collection<T> {
    /// Stable ascending sort by the natural order.
    pub fn sort(&self) -> Self {
        self.sort_by(T::cmp)
    }

    /// Stable descending sort by the natural order.
    pub fn sort_desc(&self) -> Self {
        self.sort_desc_by(T::cmp)
    }
}

impl<T> Collection<T> {
    /// One uniformly chosen element, drawing from `rng`. `None` when empty.
    pub fn random_with<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng + ?Sized,
    {
        self.items.choose(rng)
    }

    /// One uniformly chosen element using the thread-local generator.
    pub fn random(&self) -> Option<&T> {
        self.random_with(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_to_five() -> Collection<i32> {
        collection![1, 2, 3, 4, 5]
    }

    #[test]
    fn sort_by_comparator() {
        let c = collection![5, 2, 8, 1, 9];
        assert_eq!(c.sort_by(|a, b| a.cmp(b)).all(), &[1, 2, 5, 8, 9]);
        assert_eq!(c.sort_desc_by(|a, b| a.cmp(b)).all(), &[9, 8, 5, 2, 1]);
        assert_eq!(c.all(), &[5, 2, 8, 1, 9]);
    }

    #[test]
    fn sort_is_stable_both_directions() {
        let c = collection![("b", 2), ("a", 1), ("c", 2), ("d", 1)];
        let asc = c.sort_by(|x, y| x.1.cmp(&y.1));
        assert_eq!(asc.all(), &[("a", 1), ("d", 1), ("b", 2), ("c", 2)]);

        let desc = c.sort_desc_by(|x, y| x.1.cmp(&y.1));
        assert_eq!(desc.all(), &[("b", 2), ("c", 2), ("a", 1), ("d", 1)]);
    }

    #[test]
    fn natural_sort() {
        let c = collection!["pear", "apple", "fig"];
        assert_eq!(c.sort().all(), &["apple", "fig", "pear"]);
        assert_eq!(c.sort_desc().all(), &["pear", "fig", "apple"]);
    }

    #[test]
    fn slice_clamps_bounds() {
        let c = one_to_five();
        assert_eq!(c.slice(1, 3).all(), &[2, 3]);
        assert_eq!(c.slice(-5, 2).all(), &[1, 2]);
        assert_eq!(c.slice(3, 100).all(), &[4, 5]);
        assert!(c.slice(4, 2).is_empty());
        assert!(c.slice(10, 20).is_empty());
        assert!(c.slice(0, -1).is_empty());
    }

    #[test]
    fn take_from_front_and_back() {
        let c = one_to_five();
        assert_eq!(c.take(3).all(), &[1, 2, 3]);
        assert_eq!(c.take(10).all(), &[1, 2, 3, 4, 5]);
        assert_eq!(c.take(-2).all(), &[4, 5]);
        assert_eq!(c.take(-10).all(), &[1, 2, 3, 4, 5]);
        assert!(c.take(0).is_empty());
    }

    #[test]
    fn skip_clamps() {
        let c = one_to_five();
        assert_eq!(c.skip(2).all(), &[3, 4, 5]);
        assert!(c.skip(5).is_empty());
        assert!(c.skip(10).is_empty());
        assert_eq!(c.skip(-3), c);
    }

    #[test]
    fn reverse_flips_order() {
        assert_eq!(one_to_five().reverse().all(), &[5, 4, 3, 2, 1]);
        assert!(Collection::<i32>::new().reverse().is_empty());
    }

    #[test]
    fn chunk_even_split() {
        let c: Collection<i32> = (1..=9).collect();
        let chunks = c.chunk(3);
        assert_eq!(
            chunks,
            collection![collection![1, 2, 3], collection![4, 5, 6], collection![7, 8, 9]]
        );
    }

    #[test]
    fn chunk_non_positive_size_yields_nothing() {
        let c: Collection<i32> = (1..=9).collect();
        assert!(c.chunk(0).is_empty());
        assert!(c.chunk(-4).is_empty());
    }

    #[test]
    fn chunk_of_empty_is_empty() {
        assert!(Collection::<i32>::new().chunk(3).is_empty());
    }

    #[test]
    fn shuffle_with_seed_is_deterministic_permutation() {
        let c: Collection<i32> = (1..=20).collect();
        let first = c.shuffle_with(&mut StdRng::seed_from_u64(7));
        let second = c.shuffle_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
        assert_eq!(first.sort(), c);
    }

    #[test]
    fn random_with_seed() {
        let c = one_to_five();
        let picked = c.random_with(&mut StdRng::seed_from_u64(42));
        assert!(picked.is_some_and(|n| c.contains(n)));
        assert_eq!(picked, c.random_with(&mut StdRng::seed_from_u64(42)));
    }

    #[test]
    fn random_on_empty_is_absent() {
        let c: Collection<i32> = Collection::new();
        assert_eq!(c.random(), None);
        assert!(c.shuffle().is_empty());
    }
}
