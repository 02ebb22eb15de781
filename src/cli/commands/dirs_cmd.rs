//! dirs command - ensure, remove, or list directories

use std::path::Path;

use anyhow::Result;

use crate::cli::document::emit_collection;
use crate::cli::Context;
use crate::storage;
use crate::ui::output;

/// Create `path` and its parents.
pub fn ensure(ctx: &Context, path: &Path) -> Result<()> {
    storage::ensure_directory(path)?;
    output::success(format!("Created {}", path.display()), ctx.verbosity());
    Ok(())
}

/// Remove `path` recursively.
pub fn remove(ctx: &Context, path: &Path) -> Result<()> {
    if !path.exists() {
        output::warn(format!("{} does not exist", path.display()), ctx.verbosity());
        return Ok(());
    }
    storage::remove_directory_tree(path)?;
    output::success(format!("Removed {}", path.display()), ctx.verbosity());
    Ok(())
}

/// Print the names of the subdirectories of `path`.
pub fn list(ctx: &Context, path: &Path) -> Result<()> {
    let names = storage::list_subdirectories(path)?;
    emit_collection(ctx, &names.map(|name| serde_json::Value::String(name.clone())))
}
