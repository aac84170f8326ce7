use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolve the data root: an explicit override, or the current working directory
pub fn get_data_root(override_root: Option<&Path>) -> Result<PathBuf> {
    match override_root {
        Some(root) => Ok(root.to_path_buf()),
        None => env::current_dir().context("Failed to determine current working directory"),
    }
}
