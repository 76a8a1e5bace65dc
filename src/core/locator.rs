use crate::utils::error::{CheckError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks `root` depth-first in file-name order and returns the first file named
/// exactly `file_name`. Symlinks to files match; directories never do. The walk
/// stops at the first match.
pub fn find_file<P: AsRef<Path>>(root: P, file_name: &str) -> Result<PathBuf> {
    let root = root.as_ref();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| CheckError::Traversal {
            root: root.to_path_buf(),
            source,
        })?;

        if entry.file_name() == file_name && entry.path().is_file() {
            tracing::debug!("Matched {} at {}", file_name, entry.path().display());
            return Ok(entry.into_path());
        }
    }

    Err(CheckError::NotFound {
        file_name: file_name.to_string(),
        root: root.to_path_buf(),
    })
}
