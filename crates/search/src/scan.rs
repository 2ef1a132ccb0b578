//! Case-insensitive substring scanning.
//!
//! Matching is a char-wise scan, not a pattern language: there is nothing to
//! escape, so arbitrary user input (including regex metacharacters) is always
//! treated literally. Case folding is per-char simple lowercase, which is
//! what the surrounding UI applies to queries as well.

fn chars_eq_ci(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Matches `needle` at byte position `pos` of `haystack`, returning the end
/// byte offset of the match.
fn match_at(haystack: &str, needle: &str, pos: usize) -> Option<usize> {
	let mut hay = haystack[pos..].char_indices();
	let mut end = pos;
	for n in needle.chars() {
		let (off, h) = hay.next()?;
		if !chars_eq_ci(h, n) {
			return None;
		}
		end = pos + off + h.len_utf8();
	}
	Some(end)
}

/// Finds the first case-insensitive occurrence of `needle` in `haystack`
/// starting at byte offset `from` (which must be a char boundary). Returns
/// the byte range of the match.
pub(crate) fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<(usize, usize)> {
	if needle.is_empty() {
		return None;
	}
	haystack[from..]
		.char_indices()
		.map(|(i, _)| from + i)
		.find_map(|pos| match_at(haystack, needle, pos).map(|end| (pos, end)))
}

/// Returns true if `haystack` contains `needle`, case-insensitively.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
	find_ci(haystack, needle, 0).is_some()
}

/// Returns true if the two strings are equal char-for-char under
/// case-insensitive comparison.
pub(crate) fn eq_ci(a: &str, b: &str) -> bool {
	match_at(a, b, 0) == Some(a.len())
}
