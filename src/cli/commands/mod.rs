//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the input document (when the command needs one)
//! 2. Runs a single collection operation
//! 3. Renders the result through [`crate::cli::document`]
//!
//! Absent results (first of an empty array, an out-of-range index, the
//! minimum of nothing) print `null`. Only unreadable input, non-numeric
//! projections and filesystem failures are errors.

mod aggregate;
mod completion;
mod config_cmd;
mod dirs_cmd;
mod inspect;
mod ordering;
mod sets;
mod transform;

// Re-export command functions for testing and direct invocation
pub use aggregate::{avg, join, max, min, sum, unique};
pub use completion::completion;
pub use config_cmd::show as config_show;
pub use dirs_cmd::{ensure as dirs_ensure, list as dirs_list, remove as dirs_remove};
pub use inspect::{count, first, get, last};
pub use ordering::{chunk, random, reverse, shuffle, skip, slice, sort, take};
pub use sets::{apply as apply_set_op, SetOp};
pub use transform::{flatten, group_by, grouped, keep_where, partition, pluck};

use crate::cli::args::{Command, DirsAction};
use crate::cli::Context;
use crate::config::Config;
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context, config: &Config) -> Result<()> {
    output::debug(format!("command: {:?}", command), ctx.verbosity());

    match command {
        // Inspection
        Command::Count => inspect::count(ctx),
        Command::First => inspect::first(ctx),
        Command::Last => inspect::last(ctx),
        Command::Get { index } => inspect::get(ctx, index),

        // Transformation
        Command::Where { key, value, not } => transform::keep_where(ctx, &key, &value, not),
        Command::Pluck { key } => transform::pluck(ctx, &key),
        Command::Flatten => transform::flatten(ctx),
        Command::Partition { key } => transform::partition(ctx, &key),
        Command::GroupBy { key } => transform::group_by(ctx, &key),

        // Ordering
        Command::Reverse => ordering::reverse(ctx),
        Command::Sort { key, desc } => ordering::sort(ctx, key.as_deref(), desc),
        Command::Take { n } => ordering::take(ctx, n),
        Command::Skip { n } => ordering::skip(ctx, n),
        Command::Slice { start, end } => ordering::slice(ctx, start, end),
        Command::Chunk { size } => ordering::chunk(ctx, size),
        Command::Shuffle => ordering::shuffle(ctx),
        Command::Random => ordering::random(ctx),

        // Aggregation
        Command::Unique { key } => aggregate::unique(ctx, key.as_deref()),
        Command::Sum { key } => aggregate::sum(ctx, key.as_deref()),
        Command::Avg { key } => aggregate::avg(ctx, key.as_deref()),
        Command::Min { key } => aggregate::min(ctx, key.as_deref()),
        Command::Max { key } => aggregate::max(ctx, key.as_deref()),
        Command::Join { separator, key } => {
            aggregate::join(ctx, separator.as_deref(), key.as_deref())
        }

        // Set algebra
        Command::Diff { other } => sets::run(ctx, SetOp::Diff, &other),
        Command::Intersect { other } => sets::run(ctx, SetOp::Intersect, &other),
        Command::Union { other } => sets::run(ctx, SetOp::Union, &other),

        // Utilities
        Command::Dirs { action } => match action {
            DirsAction::Ensure { path } => dirs_cmd::ensure(ctx, &path),
            DirsAction::Remove { path } => dirs_cmd::remove(ctx, &path),
            DirsAction::List { path } => dirs_cmd::list(ctx, &path),
        },
        Command::Config => config_cmd::show(config),
        Command::Completion { shell } => completion::completion(shell),
    }
}
