use anyhow::Result;
use tracing::{info, warn};

use super::collect_outcomes;
use super::discovery::{collection_exists, list_json_files};
use super::writer::write_index;
use crate::config::FlatCollection;
use crate::models::{IndexSummary, ItemRecord, ItemSource};
use crate::parsers::read_source;
use crate::sorting::natural_cmp;
use crate::utils::display_name;

/// Build the flat index for one collection and write it to its output file
///
/// Every `.json` file in the source directory becomes one [`ItemRecord`]; the records are
/// ordered by `id` with [`natural_cmp`].
///
/// # Returns
///
/// `Ok(None)` when the source directory does not exist (nothing is written), otherwise
/// the counts of what was written.
///
/// # Errors
///
/// Returns an error if the directory cannot be checked or listed, or the output cannot be
/// written. Unreadable, empty and malformed files are logged and skipped.
pub fn index_flat_collection(collection: &FlatCollection) -> Result<Option<IndexSummary>> {
    let name = display_name(&collection.source_dir);
    if !collection_exists(&collection.source_dir)? {
        warn!(
            "'{}' folder not found at {}. Skipping index.",
            name,
            collection.source_dir.display()
        );
        return Ok(None);
    }

    info!("Processing {}...", name);
    let outcomes = list_json_files(&collection.source_dir)?.into_iter().map(|file| {
        let outcome = read_source::<ItemSource>(&file.path)
            .map(|source| ItemRecord::from_source(source, &file.filename));
        (file.filename, outcome)
    });
    let (mut records, skipped) = collect_outcomes(&name, outcomes);

    records.sort_by(|a, b| natural_cmp(&a.sort_key(), &b.sort_key()));

    write_index(&collection.output_file, &records)?;

    let summary = IndexSummary {
        collection: name,
        output_file: collection.output_file.clone(),
        records: records.len(),
        skipped,
    };
    info!("{}", summary);
    Ok(Some(summary))
}
