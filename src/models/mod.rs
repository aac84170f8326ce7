//! Data models for catalog content and the indexes built from it.
//!
//! - [`ItemSource`] / [`ItemRecord`] - one file of a flat collection and its index entry
//! - [`GroupedSource`] / [`GroupRecord`] / [`ChildRecord`] - files of a grouped collection
//!   and the nested group entries built from their filenames
//! - [`IndexSummary`] / [`RunSummary`] - counts reported after each run
//!
//! Output records use serde field order as the key order of the written JSON.

pub mod group;
pub mod item;
pub mod summary;

pub use group::{ChildRecord, FALLBACK_GROUP_NAME_PREFIX, GroupRecord, GroupedSource};
pub use item::{ItemRecord, ItemSource};
pub use summary::{IndexSummary, RunSummary};
