//! collection
//!
//! Generic, chainable ordered collection.
//!
//! # Modules
//!
//! - [`transform`] - filter, map, reduce, flat-map, partition, group-by
//! - [`aggregate`] - sums, averages, extrema, uniqueness, set algebra
//! - [`ordering`] - sorting, slicing, chunking, reversal, random sampling
//! - [`interchange`] - JSON encoding and decoding
//! - [`combinators`] - tap, when/unless, pipe
//!
//! # Mutation vs Derivation
//!
//! Only [`Collection::push`], [`Collection::push_all`],
//! [`Collection::prepend`], [`Collection::pop`] and [`Collection::shift`]
//! touch the receiver. They take `&mut self`. Every other operation reads
//! the receiver and returns a new collection.
//!
//! # Absence
//!
//! Accessors that may legitimately find nothing return `Option`. Out of
//! range indices, empty collections and negative positions never panic.
//!
//! # Example
//!
//! ```
//! use pippi::collection;
//! use pippi::collection::Collection;
//!
//! let evens: Collection<i32> = collection![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//!     .filter(|n| n % 2 == 0)
//!     .skip(1)
//!     .take(2);
//!
//! assert_eq!(evens.all(), &[4, 6]);
//! ```

pub mod aggregate;
pub mod combinators;
pub mod interchange;
pub mod ordering;
pub mod transform;

pub use interchange::InterchangeError;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Build a [`Collection`] from a list of elements, like `vec!`.
///
/// ```
/// use pippi::collection;
///
/// let c = collection![1, 2, 3];
/// assert_eq!(c.count(), 3);
///
/// let empty: pippi::collection::Collection<u8> = collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::collection::Collection::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::collection::Collection::from_vec(vec![$($item),+])
    };
}

/// An ordered collection of `T`.
///
/// Insertion order is preserved by every operation except the ones that
/// explicitly reorder (sorting, reversal, shuffling) or discard elements.
///
/// `Clone` copies the spine; the clone and the source never share
/// storage, so mutating one leaves the other untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Collection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a collection that takes ownership of `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Create a collection by cloning a slice.
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            items: items.to_vec(),
        }
    }

    /// All elements, in order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Same as [`Collection::all`].
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the collection and return its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Iterate over the elements by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Same as [`Collection::count`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// Element at `index`, or `None` when the index is negative or past the end.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let c = collection!["a", "b"];
    /// assert_eq!(c.get(1), Some(&"b"));
    /// assert_eq!(c.get(2), None);
    /// assert_eq!(c.get(-1), None);
    /// ```
    pub fn get(&self, index: isize) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.items.get(index))
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    // =========================================================================
    // In-place mutators
    // =========================================================================

    /// Append one element to the end.
    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Append every element of `items` to the end.
    pub fn push_all<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(items);
        self
    }

    /// Insert `items` at the front, keeping their relative order.
    ///
    /// ```
    /// use pippi::collection;
    ///
    /// let mut c = collection![3, 4];
    /// c.prepend([1, 2]);
    /// assert_eq!(c.all(), &[1, 2, 3, 4]);
    /// ```
    pub fn prepend<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut front: Vec<T> = items.into_iter().collect();
        front.append(&mut self.items);
        self.items = front;
        self
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Remove and return the first element.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    // =========================================================================
    // Iteration with side effects
    // =========================================================================

    /// Call `f` on every element in order.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&T),
    {
        for item in &self.items {
            f(item);
        }
        self
    }

    /// Call `f` on every element together with its position.
    pub fn each_with_index<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(usize, &T),
    {
        for (index, item) in self.items.iter().enumerate() {
            f(index, item);
        }
        self
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.items)
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> From<Collection<T>> for Vec<T> {
    fn from(collection: Collection<T>) -> Self {
        collection.items
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Collection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
