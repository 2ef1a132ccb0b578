use std::collections::HashSet;

use indexmap::IndexMap;
use origin_primitives::ContentKind;
use thiserror::Error;

use crate::record::SearchRecord;
use crate::scan::contains_ci;

/// Errors raised while building the index from the seeded record set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
	/// Two records share an identifier.
	#[error("duplicate record id: {0}")]
	DuplicateId(String),
}

/// The immutable, in-memory index over all searchable content.
///
/// Built once at startup; never mutated afterwards. Record order is the
/// display order the content set was authored in, and queries preserve it.
#[derive(Debug, Clone)]
pub struct SearchIndex {
	records: Vec<SearchRecord>,
}

impl SearchIndex {
	/// Builds the index, validating id uniqueness.
	pub fn build(records: Vec<SearchRecord>) -> Result<Self, IndexError> {
		let mut seen = HashSet::with_capacity(records.len());
		for record in &records {
			if !seen.insert(record.id.as_str()) {
				return Err(IndexError::DuplicateId(record.id.clone()));
			}
		}
		tracing::debug!(records = records.len(), "search.index_built");
		Ok(Self { records })
	}

	/// All records, in index order.
	pub fn records(&self) -> &[SearchRecord] {
		&self.records
	}

	/// Number of indexed records.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if nothing is indexed.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Evaluates `query` against the index.
	///
	/// A trimmed-empty query returns no results — the consuming page hides
	/// the results panel entirely rather than listing everything. Otherwise
	/// a record matches when its title or any keyword contains the query
	/// case-insensitively; matches keep index order.
	pub fn search(&self, query: &str) -> Vec<&SearchRecord> {
		let query = query.trim();
		if query.is_empty() {
			return Vec::new();
		}
		let hits: Vec<&SearchRecord> = self
			.records
			.iter()
			.filter(|record| {
				contains_ci(&record.title, query)
					|| record.keywords.iter().any(|keyword| contains_ci(keyword, query))
			})
			.collect();
		tracing::debug!(query, hits = hits.len(), "search.query");
		hits
	}
}

/// Partitions results into the closed category buckets.
///
/// All ten kinds are present as keys, in [`ContentKind::ALL`] order, empty
/// buckets included; intra-bucket order is the input order. The display
/// layer skips empty buckets.
pub fn group_by_kind<'a>(results: &[&'a SearchRecord]) -> IndexMap<ContentKind, Vec<&'a SearchRecord>> {
	let mut groups: IndexMap<ContentKind, Vec<&SearchRecord>> =
		ContentKind::ALL.into_iter().map(|kind| (kind, Vec::new())).collect();
	for record in results {
		if let Some(bucket) = groups.get_mut(&record.kind) {
			bucket.push(record);
		}
	}
	groups
}
