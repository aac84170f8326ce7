use std::fmt;
use std::path::PathBuf;

/// Outcome of indexing one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub collection: String,
    pub output_file: PathBuf,
    /// Top-level entries written: items for a flat index, groups for a grouped one
    pub records: usize,
    pub skipped: usize,
}

impl fmt::Display for IndexSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_name = self
            .output_file
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.output_file.to_string_lossy());
        write!(
            f,
            "{}: generated {} with {} entries ({} files skipped)",
            self.collection, file_name, self.records, self.skipped
        )
    }
}

/// Outcome of a full run, one slot per configured collection
///
/// `None` marks a collection whose source directory was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub flat: Option<IndexSummary>,
    pub grouped: Vec<Option<IndexSummary>>,
}

impl RunSummary {
    pub fn steps(&self) -> impl Iterator<Item = &Option<IndexSummary>> {
        std::iter::once(&self.flat).chain(self.grouped.iter())
    }

    pub fn written(&self) -> usize {
        self.steps().filter(|s| s.is_some()).count()
    }
}
