//! cli::document
//!
//! JSON documents as collections: loading input, projecting fields,
//! comparing values and rendering results.
//!
//! # Field paths
//!
//! Fields are addressed with dot-separated paths (`address.city`).
//! Numeric segments index into arrays (`tags.0`). A missing field
//! projects to `null`.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{bail, Context as _, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::Value;

use super::Context;
use crate::collection::Collection;
use crate::ui::output;

/// A JSON array loaded as a collection.
pub type Document = Collection<Value>;

/// Read the command input: `--input` if given, stdin otherwise.
pub fn load_input(ctx: &Context) -> Result<Document> {
    let document = match &ctx.input {
        Some(path) => load_file(path)?,
        None => Collection::from_reader(io::stdin().lock())
            .context("Failed to read JSON array from stdin")?,
    };
    output::debug(
        format!("loaded {} element(s)", document.count()),
        ctx.verbosity(),
    );
    Ok(document)
}

/// Read a JSON array from a file.
pub fn load_file(path: &Path) -> Result<Document> {
    let file =
        File::open(path).with_context(|| format!("Failed to open '{}'", path.display()))?;
    Collection::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read JSON array from '{}'", path.display()))
}

/// Look up a dot-separated field path. Missing fields yield `None`.
pub fn field<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Project `value` through an optional field path, cloning the result.
pub fn project(value: &Value, key: Option<&str>) -> Value {
    match key {
        Some(path) => field(value, path).cloned().unwrap_or(Value::Null),
        None => value.clone(),
    }
}

/// Pair every element with its numeric projection.
///
/// Fails on the first element whose projection is not a number.
pub fn numbers(document: &Document, key: Option<&str>) -> Result<Collection<(f64, Value)>> {
    let mut pairs = Vec::with_capacity(document.count());
    for (index, item) in document.iter().enumerate() {
        let projected = project(item, key);
        let Some(number) = projected.as_f64() else {
            match key {
                Some(path) => bail!("Element {} has no numeric field '{}'", index, path),
                None => bail!("Element {} is not a number: {}", index, item),
            }
        };
        pairs.push((number, item.clone()));
    }
    Ok(Collection::from_vec(pairs))
}

/// Whether a value counts as "set" for partitioning: anything but
/// `null`, `false`, `0`, `""`, `[]` and `{}`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Parse a command-line literal as JSON, falling back to a plain string.
pub fn parse_literal(literal: &str) -> Value {
    serde_json::from_str(literal).unwrap_or_else(|_| Value::String(literal.to_string()))
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Canonical text of a value, used as its identity for unique, grouping
/// and set operations.
///
/// Object keys are sorted by `serde_json::Map`, and integral floats
/// render as integers, so values that [`compare_values`] treats as equal
/// (`1` and `1.0`) render identically.
pub fn canonical(value: &Value) -> String {
    normalized(value).to_string()
}

/// Rewrite integral floats as integers, recursively.
fn normalized(value: &Value) -> Value {
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => Value::from(f as i64),
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalized).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), normalized(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Total order over JSON values: null < bool < number < string < array < object.
///
/// Numbers compare numerically, strings lexically, and containers by
/// their canonical text.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a)
            .cmp(&rank(b))
            .then_with(|| canonical(a).cmp(&canonical(b))),
    }
}

/// Random source for shuffle/random: seeded when a seed is configured.
pub fn rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

/// Print a collection result in the configured format.
pub fn emit_collection(ctx: &Context, document: &Document) -> Result<()> {
    if ctx.format == "lines" {
        if document.is_not_empty() {
            let lines = document.map(render_line);
            output::print(output::format_list(lines.all()));
        }
        return Ok(());
    }

    let json = if ctx.pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    }
    .context("Failed to encode result")?;
    output::print(json);
    Ok(())
}

/// Print a single value result in the configured format.
pub fn emit_value(ctx: &Context, value: &Value) -> Result<()> {
    if ctx.format == "lines" {
        output::print(render_line(value));
        return Ok(());
    }

    let json = if ctx.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to encode result")?;
    output::print(json);
    Ok(())
}

/// Strings print raw in line mode; everything else prints as JSON.
fn render_line(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_walks_objects_and_arrays() {
        let value = json!({"user": {"name": "Alice", "tags": ["a", "b"]}});
        assert_eq!(field(&value, "user.name"), Some(&json!("Alice")));
        assert_eq!(field(&value, "user.tags.1"), Some(&json!("b")));
        assert_eq!(field(&value, "user.missing"), None);
        assert_eq!(field(&value, "user.name.deeper"), None);
    }

    #[test]
    fn project_missing_is_null() {
        let value = json!({"a": 1});
        assert_eq!(project(&value, Some("b")), Value::Null);
        assert_eq!(project(&value, None), value);
    }

    #[test]
    fn numbers_rejects_non_numeric() {
        let document: Document = Collection::from_vec(vec![json!({"n": 1}), json!({"n": "x"})]);
        let err = numbers(&document, Some("n")).unwrap_err();
        assert!(err.to_string().contains("Element 1"));
    }

    #[test]
    fn numbers_pairs_values() {
        let document: Document = Collection::from_vec(vec![json!(2), json!(3.5)]);
        let pairs = numbers(&document, None).unwrap();
        assert_eq!(pairs.sum_by(|(n, _)| *n), 5.5);
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(2)));
        assert!(is_truthy(&json!("x")));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
    }

    #[test]
    fn literals_parse_as_json_first() {
        assert_eq!(parse_literal("true"), json!(true));
        assert_eq!(parse_literal("42"), json!(42));
        assert_eq!(parse_literal("Bob"), json!("Bob"));
        assert_eq!(parse_literal("\"42\""), json!("42"));
    }

    #[test]
    fn compare_orders_across_types() {
        assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare_values(&json!("b"), &json!("a")), Ordering::Greater);
        assert_eq!(compare_values(&json!(null), &json!(false)), Ordering::Less);
        assert_eq!(compare_values(&json!(1), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!(1.0), &json!(1)), Ordering::Equal);
    }

    #[test]
    fn canonical_merges_integral_floats() {
        assert_eq!(canonical(&json!(1.0)), canonical(&json!(1)));
        assert_eq!(canonical(&json!({"n": [2.0]})), r#"{"n":[2]}"#);
        assert_eq!(canonical(&json!(1.5)), "1.5");
        assert_ne!(canonical(&json!(1)), canonical(&json!("1")));
    }

    #[test]
    fn seeded_rng_repeats() {
        let document: Document = (0..10).map(|n| json!(n)).collect();
        let first = document.shuffle_with(&mut *rng(Some(3)));
        let second = document.shuffle_with(&mut *rng(Some(3)));
        assert_eq!(first, second);
    }
}
