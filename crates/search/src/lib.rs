//! Content search for the documentation site.
//!
//! The index is built once at startup from the externally maintained record
//! set and is immutable afterwards. Queries run synchronously on every
//! keystroke: case-insensitive substring containment over titles and
//! keywords, results in index order, grouped into the closed
//! [`ContentKind`](origin_primitives::ContentKind) buckets, with
//! per-occurrence highlight segments for the results panel.

/// Match-segment computation for result titles.
mod highlight;
/// Index construction and query evaluation.
mod index;
/// One searchable unit of content.
mod record;
/// Case-insensitive substring scanning shared by search and highlight.
mod scan;

pub use highlight::{Segment, SegmentKind, highlight};
pub use index::{IndexError, SearchIndex, group_by_kind};
pub use record::SearchRecord;
