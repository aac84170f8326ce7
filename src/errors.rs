use std::io;

use thiserror::Error;

/// Why a source file contributed no record to an index.
///
/// Skips are an expected outcome of scanning a collection: they are logged and the scan
/// moves on to the next file.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("file is empty")]
    Empty,
    #[error("file is too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
    #[error("failed to read file: {0}")]
    Read(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("expected at least 3 underscore-separated segments, found {segments}")]
    MalformedFilename { segments: usize },
}

impl SkipReason {
    /// Empty files are skipped without a log line
    pub fn is_silent(&self) -> bool {
        matches!(self, SkipReason::Empty)
    }
}
