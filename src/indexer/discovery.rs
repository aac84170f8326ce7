use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::is_json_filename;

/// A `.json` entry found in a collection directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Entry name as listed, e.g. `v84_1_p1.json`
    pub filename: String,
    pub path: PathBuf,
}

/// Whether a collection directory exists
///
/// Only a definite "not found" is `Ok(false)`. Any other metadata error, such as a
/// permission denied on a parent directory, is returned so the run fails instead of
/// silently skipping the collection.
pub fn collection_exists(dir: &Path) -> Result<bool> {
    dir.try_exists()
        .with_context(|| format!("Failed to check collection directory: {}", dir.display()))
}

/// List the `.json` entries of a collection directory, sorted by filename
///
/// Filesystems list entries in no particular order. Sorting here makes every
/// order-dependent step downstream (such as which file names a group) reproducible.
///
/// # Errors
///
/// Returns an error if the directory cannot be read or an entry cannot be accessed. A
/// missing directory is an error here too; callers check for it first.
pub fn list_json_files(dir: &Path) -> Result<Vec<SourceFile>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read collection directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read directory entry in {}", dir.display())
        })?;
        let filename = entry.file_name().to_string_lossy().into_owned();
        if is_json_filename(&filename) {
            files.push(SourceFile { filename, path: entry.path() });
        }
    }

    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(files)
}
