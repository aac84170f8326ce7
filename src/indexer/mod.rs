//! Index building for catalog collections
//!
//! # Error Handling Strategy
//!
//! - **File-level skips**: every scanned file yields either a record or a
//!   [`SkipReason`]. Skips are logged with the filename and counted, never propagated, so
//!   one bad file cannot stop a collection.
//!
//! - **Missing collections**: a source directory that does not exist is logged as a warning
//!   and its index is left untouched. Any other error checking for it (permission denied,
//!   a file in the path) is fatal.
//!
//! - **Fatal errors**: failing to list an existing directory or to write an index escapes
//!   as an `anyhow::Error`. [`run`] stops at the first one; indexes already written by
//!   earlier steps stay as they are.

pub mod discovery;
pub mod flat;
pub mod grouped;
pub mod writer;

use anyhow::{Context, Result};
use tracing::{debug, error, warn};

use crate::config::IndexConfig;
use crate::errors::SkipReason;
use crate::models::RunSummary;

pub use discovery::{SourceFile, collection_exists, list_json_files};
pub use flat::index_flat_collection;
pub use grouped::{GroupedEntry, build_groups, index_grouped_collection};
pub use writer::write_index;

/// Index every configured collection in order: the flat collection, then each grouped one
///
/// # Errors
///
/// Returns the first fatal error; later collections are not indexed.
pub fn run(config: &IndexConfig) -> Result<RunSummary> {
    let flat = index_flat_collection(&config.flat).with_context(|| {
        format!("Failed to index collection {}", config.flat.source_dir.display())
    })?;

    let mut grouped = Vec::with_capacity(config.grouped.len());
    for collection in &config.grouped {
        let summary = index_grouped_collection(collection)
            .with_context(|| format!("Failed to index collection {}", collection.label))?;
        grouped.push(summary);
    }

    Ok(RunSummary { flat, grouped })
}

/// Split per-file outcomes into records and a skip count, logging each skip
pub(crate) fn collect_outcomes<T>(
    collection: &str,
    outcomes: impl IntoIterator<Item = (String, Result<T, SkipReason>)>,
) -> (Vec<T>, usize) {
    let mut records = Vec::new();
    let mut skipped = 0;

    for (filename, outcome) in outcomes {
        match outcome {
            Ok(record) => {
                debug!(collection, file = %filename, "Indexed file");
                records.push(record);
            }
            Err(reason) => {
                skipped += 1;
                log_skip(collection, &filename, &reason);
            }
        }
    }

    (records, skipped)
}

fn log_skip(collection: &str, filename: &str, reason: &SkipReason) {
    match reason {
        r if r.is_silent() => debug!(collection, file = %filename, "Skipping empty file"),
        SkipReason::MalformedFilename { .. } => {
            warn!(collection, "Skipping incorrectly named file {}: {}", filename, reason)
        }
        _ => error!(collection, "Error parsing {}: {}", filename, reason),
    }
}
