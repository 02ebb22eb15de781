//! ordering commands - reverse, sort, take, skip, slice, chunk, shuffle, random

use anyhow::Result;
use serde_json::Value;

use crate::cli::document::{self, emit_collection, emit_value};
use crate::cli::Context;
use crate::ui::output;

pub fn reverse(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_collection(ctx, &input.reverse())
}

/// Stable sort by the element or one of its fields.
pub fn sort(ctx: &Context, key: Option<&str>, desc: bool) -> Result<()> {
    let input = document::load_input(ctx)?;
    let compare = |a: &Value, b: &Value| {
        document::compare_values(&document::project(a, key), &document::project(b, key))
    };
    let sorted = if desc {
        input.sort_desc_by(compare)
    } else {
        input.sort_by(compare)
    };
    emit_collection(ctx, &sorted)
}

pub fn take(ctx: &Context, n: isize) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_collection(ctx, &input.take(n))
}

pub fn skip(ctx: &Context, n: isize) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_collection(ctx, &input.skip(n))
}

pub fn slice(ctx: &Context, start: isize, end: isize) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_collection(ctx, &input.slice(start, end))
}

/// Print an array of chunks. A non-positive size prints `[]`.
pub fn chunk(ctx: &Context, size: isize) -> Result<()> {
    let input = document::load_input(ctx)?;
    let chunks = input
        .chunk(size)
        .map(|chunk| Value::Array(chunk.all().to_vec()));
    output::debug(format!("{} chunk(s)", chunks.count()), ctx.verbosity());
    emit_collection(ctx, &chunks)
}

pub fn shuffle(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    let mut rng = document::rng(ctx.seed);
    emit_collection(ctx, &input.shuffle_with(&mut *rng))
}

/// Print one random element, or `null` when empty.
pub fn random(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    let mut rng = document::rng(ctx.seed);
    emit_value(ctx, input.random_with(&mut *rng).unwrap_or(&Value::Null))
}
