use std::collections::HashMap;

use anyhow::Result;
use tracing::{info, warn};

use super::collect_outcomes;
use super::discovery::{SourceFile, collection_exists, list_json_files};
use super::writer::write_index;
use crate::config::GroupedCollection;
use crate::errors::SkipReason;
use crate::models::{ChildRecord, GroupRecord, GroupedSource, IndexSummary};
use crate::parsers::{GroupedFileName, parse_grouped_filename, read_source};
use crate::sorting::natural_cmp;
use crate::utils::relative_child_path;

/// A grouped source file that parsed and has a well-formed name
#[derive(Debug, Clone)]
pub struct GroupedEntry {
    pub filename: String,
    pub name: GroupedFileName,
    pub source: GroupedSource,
}

fn scan_file(file: &SourceFile) -> Result<GroupedEntry, SkipReason> {
    let source: GroupedSource = read_source(&file.path)?;
    let name = parse_grouped_filename(&file.filename)?;
    Ok(GroupedEntry { filename: file.filename.clone(), name, source })
}

/// Group entries by `group_id` and sort groups and their children
///
/// The first entry seen for a group sets its name and bio; later entries only add
/// children. Groups and children are both ordered with [`natural_cmp`].
pub fn build_groups(
    entries: impl IntoIterator<Item = GroupedEntry>,
    label: &str,
) -> Vec<GroupRecord> {
    let mut groups: Vec<GroupRecord> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let position = *positions.entry(entry.name.group_id.clone()).or_insert_with(|| {
            groups.push(GroupRecord::first_seen(
                &entry.name.group_id,
                &entry.name.group_index,
                &entry.source,
            ));
            groups.len() - 1
        });

        groups[position].prasangs.push(ChildRecord {
            id: entry.name.child_id,
            title: entry.source.title,
            file: relative_child_path(label, &entry.filename),
        });
    }

    groups.sort_by(|a, b| natural_cmp(&a.id, &b.id));
    for group in &mut groups {
        group.prasangs.sort_by(|a, b| natural_cmp(&a.id, &b.id));
    }
    groups
}

/// Build the grouped index for one collection and write it to its output file
///
/// Filenames must look like `<prefix>_<index>_<child>.json`: the first two segments name
/// the group, the third the child. Each child's `file` is `<label>/<filename>`.
///
/// # Returns
///
/// `Ok(None)` when the source directory does not exist (nothing is written), otherwise
/// the counts of what was written.
///
/// # Errors
///
/// Returns an error if the directory cannot be checked or listed, or the output cannot be
/// written. Unreadable, empty, malformed and badly named files are logged and skipped.
pub fn index_grouped_collection(collection: &GroupedCollection) -> Result<Option<IndexSummary>> {
    let label = collection.label.as_str();
    if !collection_exists(&collection.source_dir)? {
        warn!(
            "'{}' folder not found at {}. Skipping.",
            label,
            collection.source_dir.display()
        );
        return Ok(None);
    }

    info!("Processing collection {}...", label);
    let outcomes = list_json_files(&collection.source_dir)?.into_iter().map(|file| {
        let outcome = scan_file(&file);
        (file.filename, outcome)
    });
    let (entries, skipped) = collect_outcomes(label, outcomes);

    let groups = build_groups(entries, label);

    write_index(&collection.output_file, &groups)?;

    let summary = IndexSummary {
        collection: label.to_string(),
        output_file: collection.output_file.clone(),
        records: groups.len(),
        skipped,
    };
    info!("{}", summary);
    Ok(Some(summary))
}
