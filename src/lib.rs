//! Catalog Indexer - build the index files a catalog client loads at startup
//!
//! Content lives as one JSON file per item. The client only downloads a small index and
//! fetches full items on demand, so this library scans the content folders and writes:
//!
//! - A flat, id-sorted index of a collection of independent items (`aartis/` → `index.json`)
//! - Grouped indexes of collections whose filenames encode a group and a child
//!   (`varta/84/v84_1_p1.json` → group `v84_1`, child `p1` in `index_84.json`)
//!
//! Identifiers are ordered with a natural comparison, so `p2` sorts before `p10`.
//!
//! # Example
//!
//! ```no_run
//! use catalog_indexer::{IndexConfig, run};
//! use std::path::PathBuf;
//!
//! let config = IndexConfig::for_root(&PathBuf::from("/srv/catalog"));
//! let summary = run(&config)?;
//! println!("Wrote {} indexes", summary.written());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod sorting;
pub mod utils;

// Re-export commonly used types
pub use config::{FlatCollection, GroupedCollection, IndexConfig};
pub use errors::SkipReason;
pub use indexer::{index_flat_collection, index_grouped_collection, run};
pub use models::{ChildRecord, GroupRecord, IndexSummary, ItemRecord, RunSummary};
pub use sorting::natural_cmp;
