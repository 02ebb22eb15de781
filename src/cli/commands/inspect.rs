//! inspect commands - count, first, last, get

use anyhow::Result;
use serde_json::Value;

use crate::cli::document::{self, emit_value};
use crate::cli::Context;

/// Print the number of elements.
pub fn count(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_value(ctx, &Value::from(input.count()))
}

/// Print the first element, or `null` when empty.
pub fn first(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_value(ctx, input.first().unwrap_or(&Value::Null))
}

/// Print the last element, or `null` when empty.
pub fn last(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_value(ctx, input.last().unwrap_or(&Value::Null))
}

/// Print the element at `index`, or `null` when out of range.
pub fn get(ctx: &Context, index: isize) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_value(ctx, input.get(index).unwrap_or(&Value::Null))
}
