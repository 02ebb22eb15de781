//! storage
//!
//! Directory helpers used alongside collections, e.g. to list the
//! subdirectories of a data folder and feed them into a pipeline.
//!
//! # Behavior
//!
//! - [`ensure_directory`] creates the path and any missing parents.
//!   An existing directory is not an error.
//! - [`remove_directory_tree`] removes a directory and everything under it.
//!   A missing directory is not an error.
//! - [`list_subdirectories`] returns the names of immediate child
//!   directories, sorted by name. Files are skipped.
//!
//! # Example
//!
//! ```
//! use pippi::storage;
//!
//! let root = tempfile::tempdir().unwrap();
//! storage::ensure_directory(root.path().join("a/b")).unwrap();
//!
//! let names = storage::list_subdirectories(root.path().join("a")).unwrap();
//! assert_eq!(names.all(), &["b".to_string()]);
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::collection::Collection;

/// Errors from directory operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create directory '{path}': {source}")]
    CreateError { path: PathBuf, source: io::Error },

    #[error("failed to remove directory '{path}': {source}")]
    RemoveError { path: PathBuf, source: io::Error },

    #[error("failed to list directory '{path}': {source}")]
    ListError { path: PathBuf, source: io::Error },
}

/// Create `path` and all of its missing parents.
///
/// # Errors
///
/// Returns `StorageError::CreateError` if the directory cannot be created,
/// including when `path` exists as a file.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| StorageError::CreateError {
        path: path.to_path_buf(),
        source,
    })
}

/// Remove `path` and everything beneath it.
///
/// # Errors
///
/// Returns `StorageError::RemoveError` if the tree exists but cannot be removed.
pub fn remove_directory_tree(path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StorageError::RemoveError {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Names of the immediate subdirectories of `path`, sorted.
///
/// # Errors
///
/// Returns `StorageError::ListError` if `path` cannot be read.
pub fn list_subdirectories(path: impl AsRef<Path>) -> Result<Collection<String>, StorageError> {
    let path = path.as_ref();
    let list_error = |source| StorageError::ListError {
        path: path.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        if entry.file_type().map_err(list_error)?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(Collection::from_vec(names).sort())
}
