//! Collection layout for an indexing run.
//!
//! Every path the indexers touch comes from an [`IndexConfig`] value handed to
//! [`crate::indexer::run`], so tests can point a run at a temporary directory.

use std::path::{Path, PathBuf};

/// A directory of independent item files indexed into one flat array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatCollection {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
}

/// A directory of `<prefix>_<index>_<child>.json` files indexed into groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedCollection {
    pub source_dir: PathBuf,
    pub output_file: PathBuf,
    /// Prefix of every child's `file` path, relative to the collection root
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    pub flat: FlatCollection,
    pub grouped: Vec<GroupedCollection>,
}

impl IndexConfig {
    /// Standard layout below a data root:
    ///
    /// - `aartis/` → `index.json`
    /// - `varta/84/` → `index_84.json` (label `84`)
    /// - `varta/252/` → `index_252.json` (label `252`)
    pub fn for_root(root: &Path) -> Self {
        let varta = root.join("varta");
        Self {
            flat: FlatCollection {
                source_dir: root.join("aartis"),
                output_file: root.join("index.json"),
            },
            grouped: ["84", "252"]
                .into_iter()
                .map(|label| GroupedCollection {
                    source_dir: varta.join(label),
                    output_file: root.join(format!("index_{}.json", label)),
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}
