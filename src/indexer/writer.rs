//! Index output with atomic writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

const TEMP_SUFFIX: &str = ".tmp";

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Write `value` as pretty-printed JSON, replacing any previous content of `path`
///
/// The JSON goes to a sibling temp file first and is renamed into place, so a failed
/// write leaves the previous index intact.
pub fn write_index<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize index")?;

    let temp = temp_path(path);
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp.display()))?;
    if let Err(e) = fs::rename(&temp, path) {
        // Best effort; the rename error is the one worth reporting
        let _ = fs::remove_file(&temp);
        return Err(e)
            .with_context(|| format!("Failed to replace index file: {}", path.display()));
    }

    Ok(())
}
