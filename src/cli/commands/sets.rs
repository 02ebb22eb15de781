//! set commands - diff, intersect, union against a second JSON array

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::cli::document::{self, emit_collection, Document};
use crate::cli::Context;
use crate::collection::Collection;
use crate::ui::output;

/// Set operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOp {
    Diff,
    Intersect,
    Union,
}

/// Run `op` between the input and the array stored at `other`.
pub fn run(ctx: &Context, op: SetOp, other: &Path) -> Result<()> {
    let input = document::load_input(ctx)?;
    let other = document::load_file(other)?;
    output::debug(
        format!("{:?}: {} vs {} element(s)", op, input.count(), other.count()),
        ctx.verbosity(),
    );
    emit_collection(ctx, &apply(op, &input, &other)?)
}

/// Apply a set operation using canonical JSON text as element identity.
pub fn apply(op: SetOp, left: &Document, right: &Document) -> Result<Document> {
    let left = left.map(document::canonical);
    let right = right.map(document::canonical);

    let result = match op {
        SetOp::Diff => left.diff(&right),
        SetOp::Intersect => left.intersect(&right),
        SetOp::Union => left.union(&right),
    };

    result
        .iter()
        .map(|text| serde_json::from_str::<Value>(text))
        .collect::<Result<Collection<Value>, _>>()
        .context("Failed to rebuild set result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(values: &[i64]) -> Document {
        values.iter().map(|n| json!(n)).collect()
    }

    #[test]
    fn numeric_set_algebra() {
        let a = doc(&[1, 2, 3, 4, 5]);
        let b = doc(&[4, 5, 6, 7, 8]);
        assert_eq!(apply(SetOp::Diff, &a, &b).unwrap(), doc(&[1, 2, 3]));
        assert_eq!(apply(SetOp::Intersect, &a, &b).unwrap(), doc(&[4, 5]));
        assert_eq!(
            apply(SetOp::Union, &a, &b).unwrap(),
            doc(&[1, 2, 3, 4, 5, 6, 7, 8])
        );
    }

    #[test]
    fn objects_compare_structurally() {
        let a: Document = Collection::from_vec(vec![json!({"a": 1, "b": 2}), json!({"a": 2})]);
        let b: Document = Collection::from_vec(vec![json!({"b": 2, "a": 1})]);
        assert_eq!(
            apply(SetOp::Intersect, &a, &b).unwrap().all(),
            &[json!({"a": 1, "b": 2})]
        );
    }
}
