//! The closed set of content categories the site indexes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category tag attached to every searchable record.
///
/// The set is closed: search-result grouping partitions over exactly these
/// variants, in the order of [`ContentKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
	/// UI component reference pages.
	Component,
	/// Design tokens: color, spacing, shadow, typography.
	Token,
	/// Icon sets and icon usage.
	Iconography,
	/// Design guidance pages.
	Design,
	/// The "Origin 101" getting-started track.
	#[serde(rename = "origin-101")]
	Origin101,
	/// Written content guidelines.
	Content,
	/// Interaction and layout patterns.
	Pattern,
	/// Accessibility guidance.
	Accessibility,
	/// Support and contribution pages.
	Support,
	/// Release notes and announcements.
	WhatsNew,
}

impl ContentKind {
	/// Every category, in display order. Grouping buckets iterate in this
	/// order so result panels are stable across queries.
	pub const ALL: [ContentKind; 10] = [
		ContentKind::Component,
		ContentKind::Token,
		ContentKind::Iconography,
		ContentKind::Design,
		ContentKind::Origin101,
		ContentKind::Content,
		ContentKind::Pattern,
		ContentKind::Accessibility,
		ContentKind::Support,
		ContentKind::WhatsNew,
	];

	/// The canonical string form, matching the seeded content data.
	pub fn as_str(self) -> &'static str {
		match self {
			ContentKind::Component => "component",
			ContentKind::Token => "token",
			ContentKind::Iconography => "iconography",
			ContentKind::Design => "design",
			ContentKind::Origin101 => "origin-101",
			ContentKind::Content => "content",
			ContentKind::Pattern => "pattern",
			ContentKind::Accessibility => "accessibility",
			ContentKind::Support => "support",
			ContentKind::WhatsNew => "whats-new",
		}
	}
}

impl std::fmt::Display for ContentKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown content kind: {0}")]
pub struct ParseContentKindError(pub String);

impl FromStr for ContentKind {
	type Err = ParseContentKindError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ContentKind::ALL
			.into_iter()
			.find(|kind| kind.as_str() == s)
			.ok_or_else(|| ParseContentKindError(s.to_string()))
	}
}
