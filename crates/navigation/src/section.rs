use origin_primitives::{is_within, normalize};
use serde::{Deserialize, Serialize};

/// The fixed, ordered list of section root paths.
///
/// The routing collaborator owns the routing table; it hands the tracker this
/// list once at construction. Roots are normalized on the way in, and lookup
/// prefers the deepest matching root so nested sections resolve correctly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionTable {
	roots: Vec<String>,
}

impl SectionTable {
	/// Builds a table from the router's section roots.
	pub fn new<I, S>(roots: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			roots: roots.into_iter().map(|r| normalize(r.as_ref())).collect(),
		}
	}

	/// Returns the section root that owns `path`, if any.
	///
	/// `path` must already be normalized. When roots nest, the deepest match
	/// wins.
	pub fn section_of(&self, path: &str) -> Option<&str> {
		self.roots
			.iter()
			.filter(|root| is_within(path, root))
			.max_by_key(|root| root.len())
			.map(String::as_str)
	}

	/// The normalized roots, in table order.
	pub fn roots(&self) -> &[String] {
		&self.roots
	}
}
