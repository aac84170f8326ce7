//! Per-file parsing for catalog collections
//!
//! # Error Handling Strategy
//!
//! Every function here reports a per-file [`SkipReason`](crate::errors::SkipReason) instead
//! of an `anyhow::Error`:
//!
//! - **Content failures**: unreadable, oversized, empty or malformed JSON files become a
//!   skip reason. The indexers log it with the filename and move on to the next file.
//!
//! - **Filename failures**: grouped filenames with fewer than three `_`-separated segments
//!   become a skip reason in the same way.
//!
//! Nothing in this module can abort a scan. Fatal errors (listing a directory, writing an
//! index) live in the indexer.

pub mod content;
pub mod deserializers;
pub mod filename;

pub use content::read_source;
pub use filename::{GroupedFileName, parse_grouped_filename};
