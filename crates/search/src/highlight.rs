use crate::scan::{eq_ci, find_ci};

/// How a [`Segment`] should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
	/// Ordinary text outside any match.
	Plain,
	/// A case-insensitive occurrence of the query.
	Match,
	/// The whole text equals the query; rendered as one emphasized block.
	Exact,
}

/// One piece of a highlighted title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
	/// The slice of the original text, casing preserved.
	pub text: String,
	/// Render style for this slice.
	pub kind: SegmentKind,
}

impl Segment {
	fn new(text: &str, kind: SegmentKind) -> Self {
		Self {
			text: text.to_string(),
			kind,
		}
	}
}

/// Splits `text` into render segments by case-insensitive occurrences of
/// `query`.
///
/// A full-title match produces a single [`SegmentKind::Exact`] segment — an
/// exact hit reads as "this is it", not as a needle threaded through every
/// character. A trimmed-empty query produces one plain segment; occurrences
/// never overlap (scanning resumes after each match).
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
	let query = query.trim();
	if query.is_empty() {
		return vec![Segment::new(text, SegmentKind::Plain)];
	}
	if eq_ci(text, query) {
		return vec![Segment::new(text, SegmentKind::Exact)];
	}

	let mut segments = Vec::new();
	let mut cursor = 0;
	while let Some((start, end)) = find_ci(text, query, cursor) {
		if start > cursor {
			segments.push(Segment::new(&text[cursor..start], SegmentKind::Plain));
		}
		segments.push(Segment::new(&text[start..end], SegmentKind::Match));
		cursor = end;
	}
	if cursor < text.len() {
		segments.push(Segment::new(&text[cursor..], SegmentKind::Plain));
	}
	if segments.is_empty() {
		// Empty text with a non-empty query.
		segments.push(Segment::new(text, SegmentKind::Plain));
	}
	segments
}
