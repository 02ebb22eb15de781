//! collection::combinators
//!
//! Pipeline plumbing: side effects, conditional steps and escape hatches.
//!
//! ```
//! use pippi::collection;
//!
//! let verbose = true;
//! let total = collection![3, 1, 2]
//!     .when(verbose, |c| c.sort())
//!     .unless(verbose, |c| c.reverse())
//!     .tap(|c| assert_eq!(c.all(), &[1, 2, 3]))
//!     .pipe(|c| c.sum_by(|n| f64::from(*n)));
//!
//! assert_eq!(total, 6.0);
//! ```

use super::Collection;

impl<T> Collection<T> {
    /// Run `f` against the collection and hand the same collection back.
    ///
    /// `f` only sees a shared reference, so it cannot replace or mutate
    /// the receiver.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }

    /// Apply `f` when `condition` holds, otherwise pass the receiver through.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition {
            f(self)
        } else {
            self
        }
    }

    /// Apply `f` when `condition` does not hold, otherwise pass the receiver through.
    pub fn unless<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        self.when(!condition, f)
    }

    /// Hand the collection to an arbitrary function and return its result.
    pub fn pipe<U, F>(self, f: F) -> U
    where
        F: FnOnce(Self) -> U,
    {
        f(self)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::collection;

    #[test]
    fn tap_returns_receiver_unchanged() {
        let seen = Cell::new(0);
        let c = collection![1, 2, 3].tap(|c| seen.set(c.count()));
        assert_eq!(seen.get(), 3);
        assert_eq!(c.all(), &[1, 2, 3]);
    }

    #[test]
    fn when_applies_only_on_true() {
        let c = collection![1, 2, 3, 4];
        let applied = c.clone().when(true, |c| c.filter(|n| n % 2 == 0));
        let skipped = c.clone().when(false, |c| c.filter(|n| n % 2 == 0));
        assert_eq!(applied.all(), &[2, 4]);
        assert_eq!(skipped, c);
    }

    #[test]
    fn unless_applies_only_on_false() {
        let c = collection![1, 2, 3, 4];
        let applied = c.clone().unless(false, |c| c.take(1));
        let skipped = c.clone().unless(true, |c| c.take(1));
        assert_eq!(applied.all(), &[1]);
        assert_eq!(skipped, c);
    }

    #[test]
    fn pipe_escapes_the_collection_type() {
        let rendered = collection!["a", "b"].pipe(|c| c.join("-", |s| s.to_string()));
        assert_eq!(rendered, "a-b");

        let raw: Vec<i32> = collection![1, 2].pipe(Collection::into_vec);
        assert_eq!(raw, vec![1, 2]);
    }

    #[test]
    fn chained_pipeline() {
        let result = Collection::from_vec((1..=10).collect())
            .filter(|n| n % 2 == 0)
            .skip(1)
            .take(2);
        assert_eq!(result.all(), &[4, 6]);
    }
}
