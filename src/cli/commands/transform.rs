//! transform commands - where, pluck, flatten, partition, group-by

use std::collections::BTreeMap;

use anyhow::Result;
use serde_json::Value;

use crate::cli::document::{self, emit_collection, emit_value, Document};
use crate::cli::Context;
use crate::collection::Collection;
use crate::ui::output;

/// Keep (or with `not`, drop) elements whose field equals `literal`.
pub fn keep_where(ctx: &Context, key: &str, literal: &str, not: bool) -> Result<()> {
    let input = document::load_input(ctx)?;
    let expected = document::parse_literal(literal);
    output::debug(format!("where {} == {}", key, expected), ctx.verbosity());

    let matches = |item: &Value| document::field(item, key) == Some(&expected);
    let result = if not {
        input.reject(matches)
    } else {
        input.filter(matches)
    };
    emit_collection(ctx, &result)
}

/// Replace every element with one of its fields.
pub fn pluck(ctx: &Context, key: &str) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_collection(ctx, &input.pluck(|item| document::project(item, Some(key))))
}

/// Concatenate nested arrays. Non-array elements are kept as they are.
pub fn flatten(ctx: &Context) -> Result<()> {
    let input = document::load_input(ctx)?;
    let flat = input.flat_map(|item| match item {
        Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    });
    emit_collection(ctx, &flat)
}

/// Print `[matching, rest]` split on the truthiness of a field.
pub fn partition(ctx: &Context, key: &str) -> Result<()> {
    let input = document::load_input(ctx)?;
    let (matching, rest) = input.partition(|item| {
        document::field(item, key).is_some_and(document::is_truthy)
    });
    output::debug(
        format!("partition: {} matching, {} rest", matching.count(), rest.count()),
        ctx.verbosity(),
    );
    emit_value(
        ctx,
        &Value::Array(vec![
            Value::Array(matching.into_vec()),
            Value::Array(rest.into_vec()),
        ]),
    )
}

/// Print an object mapping each field value to its group.
pub fn group_by(ctx: &Context, key: &str) -> Result<()> {
    let input = document::load_input(ctx)?;
    emit_value(ctx, &grouped(&input, key))
}

/// Group `input` by the canonical text of a field. Keys are sorted so the
/// output is stable; strings group under their raw text.
pub fn grouped(input: &Document, key: &str) -> Value {
    let groups = input.group_by(|item| match document::project(item, Some(key)) {
        Value::String(s) => s,
        other => document::canonical(&other),
    });

    let sorted: BTreeMap<String, Collection<Value>> = groups.into_iter().collect();
    Value::Object(
        sorted
            .into_iter()
            .map(|(group, members)| (group, Value::Array(members.into_vec())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grouped_sorts_keys_and_keeps_member_order() {
        let input: Document = Collection::from_vec(vec![
            json!({"name": "Bob", "age": 30}),
            json!({"name": "Alice", "age": 25}),
            json!({"name": "David", "age": 30}),
            json!({"name": "Eve"}),
        ]);

        let groups = grouped(&input, "age");
        assert_eq!(
            groups,
            json!({
                "25": [{"name": "Alice", "age": 25}],
                "30": [{"name": "Bob", "age": 30}, {"name": "David", "age": 30}],
                "null": [{"name": "Eve"}],
            })
        );
    }
}
