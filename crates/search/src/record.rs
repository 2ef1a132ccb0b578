use origin_primitives::ContentKind;
use serde::{Deserialize, Serialize};

/// One searchable unit of site content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
	/// Stable identifier, unique across the whole index.
	pub id: String,
	/// Display title, the primary match target.
	pub title: String,
	/// Destination route for the result link.
	pub path: String,
	/// Category used for result grouping.
	pub kind: ContentKind,
	/// Optional synonyms that also participate in matching.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn deserializes_without_keywords() {
		let record: SearchRecord = serde_json::from_str(
			r#"{"id":"btn","title":"Button","path":"/components/button","kind":"component"}"#,
		)
		.unwrap();
		assert_eq!(record.kind, ContentKind::Component);
		assert!(record.keywords.is_empty());
	}

	#[test]
	fn keywords_round_trip() {
		let record = SearchRecord {
			id: "spacing".to_string(),
			title: "Spacing".to_string(),
			path: "/tokens/spacing".to_string(),
			kind: ContentKind::Token,
			keywords: vec!["margin".to_string(), "padding".to_string()],
		};
		let json = serde_json::to_string(&record).unwrap();
		assert_eq!(serde_json::from_str::<SearchRecord>(&json).unwrap(), record);
	}
}
