//! Pippi - chainable generic collections
//!
//! Pippi provides [`collection::Collection`], an ordered container with
//! functional transformation, aggregation, set algebra, partitioning,
//! grouping and JSON interchange, designed for fluent method chaining.
//!
//! # Architecture
//!
//! - [`collection`] - The container and its transformation, aggregation,
//!   ordering, interchange and combinator layers
//! - [`storage`] - Directory helpers used alongside collections
//! - [`defaults`] - Fill absent optional fields from a defaults value
//! - [`config`] - Configuration schema and loading
//! - [`ui`] - Verbosity-aware output
//! - [`cli`] - The `pippi` command-line interface
//!
//! # Correctness Invariants
//!
//! 1. Only push, push_all, prepend, pop and shift mutate a collection;
//!    every other operation returns a new one
//! 2. Accessors report absence with `Option`, never by panicking
//! 3. Out-of-range positions, empty inputs and non-positive sizes are
//!    clamped to documented results, not errors
//! 4. Only encoding and decoding can fail
//!
//! # Example
//!
//! ```
//! use pippi::collection;
//!
//! let scores = collection![("Alice", 85.5), ("Bob", 70.0), ("Charlie", 92.0)];
//!
//! let top = scores.max_by(|(_, score)| *score).map(|(name, _)| *name);
//! assert_eq!(top, Some("Charlie"));
//!
//! let passing = scores.filter(|(_, score)| *score >= 80.0).pluck(|(name, _)| *name);
//! assert_eq!(passing.all(), &["Alice", "Charlie"]);
//! ```

pub mod cli;
pub mod collection;
pub mod config;
pub mod defaults;
pub mod storage;
pub mod ui;
