//! aggregate commands - unique, sum, avg, min, max, join

use anyhow::Result;
use serde_json::Value;

use crate::cli::document::{self, emit_collection, emit_value};
use crate::cli::Context;

/// Drop duplicates, comparing whole elements or one field.
pub fn unique(ctx: &Context, key: Option<&str>) -> Result<()> {
    let input = document::load_input(ctx)?;
    let distinct = input.unique_by(|item| document::canonical(&document::project(item, key)));
    emit_collection(ctx, &distinct)
}

pub fn sum(ctx: &Context, key: Option<&str>) -> Result<()> {
    let input = document::load_input(ctx)?;
    let total = document::numbers(&input, key)?.sum_by(|(n, _)| *n);
    emit_value(ctx, &Value::from(total))
}

/// Average of the numeric projection; `0` for empty input.
pub fn avg(ctx: &Context, key: Option<&str>) -> Result<()> {
    let input = document::load_input(ctx)?;
    let mean = document::numbers(&input, key)?.avg_by(|(n, _)| *n);
    emit_value(ctx, &Value::from(mean))
}

/// Print the element with the smallest projection, or `null` when empty.
pub fn min(ctx: &Context, key: Option<&str>) -> Result<()> {
    let input = document::load_input(ctx)?;
    let pairs = document::numbers(&input, key)?;
    let found = pairs.min_by(|(n, _)| *n).map(|(_, item)| item);
    emit_value(ctx, found.unwrap_or(&Value::Null))
}

/// Print the element with the largest projection, or `null` when empty.
pub fn max(ctx: &Context, key: Option<&str>) -> Result<()> {
    let input = document::load_input(ctx)?;
    let pairs = document::numbers(&input, key)?;
    let found = pairs.max_by(|(n, _)| *n).map(|(_, item)| item);
    emit_value(ctx, found.unwrap_or(&Value::Null))
}

/// Print the elements (or one field of each) joined by a separator.
pub fn join(ctx: &Context, separator: Option<&str>, key: Option<&str>) -> Result<()> {
    let input = document::load_input(ctx)?;
    let separator = separator.unwrap_or(ctx.separator.as_str());
    let joined = input.join(separator, |item| match document::project(item, key) {
        Value::String(s) => s,
        other => other.to_string(),
    });
    emit_value(ctx, &Value::String(joined))
}
