use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::SkipReason;
use crate::utils::validate_file_size;

/// Read one source file and parse it into `T`
///
/// Empty or whitespace-only files yield [`SkipReason::Empty`]; files over the size limit,
/// unreadable files and invalid JSON yield the matching [`SkipReason`]. None of these are
/// fatal to the caller's scan.
pub fn read_source<T: DeserializeOwned>(path: &Path) -> Result<T, SkipReason> {
    // Open first and check the size on the handle we read from
    let mut file = File::open(path)?;
    validate_file_size(&file)?;

    let mut content = String::new();
    file.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Err(SkipReason::Empty);
    }

    Ok(serde_json::from_str(&content)?)
}
