use std::fs::File;
use std::path::Path;

use crate::errors::SkipReason;

// Maximum size of a single content file: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Extension every indexed source file carries
pub const JSON_EXTENSION: &str = ".json";

/// Whether a directory entry name looks like a source file (case-sensitive)
pub fn is_json_filename(name: &str) -> bool {
    name.ends_with(JSON_EXTENSION)
}

/// Filename with a trailing `.json` removed
pub fn strip_json_extension(name: &str) -> &str {
    name.strip_suffix(JSON_EXTENSION).unwrap_or(name)
}

/// Validates an open file against [`MAX_FILE_SIZE_BYTES`]
///
/// Takes the already-opened handle so the size checked is the size read.
pub fn validate_file_size(file: &File) -> Result<(), SkipReason> {
    let size = file.metadata()?.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(SkipReason::TooLarge { size, limit: MAX_FILE_SIZE_BYTES });
    }
    Ok(())
}

/// Child path as the client fetches it: `<label>/<filename>`
pub fn relative_child_path(label: &str, filename: &str) -> String {
    format!("{}/{}", label, filename)
}

/// Best-effort display name for a path in log lines
pub fn display_name(path: &Path) -> String {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy().into_owned()
}
