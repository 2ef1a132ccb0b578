//! Route-path helpers.
//!
//! Routes are plain strings handed in by the hosting router. All comparisons
//! in the site core go through [`normalize`] first so that `/components/` and
//! `/components` refer to the same place, and containment checks respect
//! component boundaries (`/components2` is not inside `/components`).

/// Normalizes a route path: guarantees a leading slash and strips any
/// trailing slash (except for the root path itself).
pub fn normalize(path: &str) -> String {
	let trimmed = path.trim();
	let mut out = String::with_capacity(trimmed.len() + 1);
	if !trimmed.starts_with('/') {
		out.push('/');
	}
	out.push_str(trimmed);
	while out.len() > 1 && out.ends_with('/') {
		out.pop();
	}
	out
}

/// Returns true if `path` is strictly below `root`.
///
/// Both inputs are expected to be normalized. The root itself does not count
/// as its own sub-path.
pub fn is_strict_sub_path(path: &str, root: &str) -> bool {
	if root == "/" {
		return path != "/" && path.starts_with('/');
	}
	path.len() > root.len() && path.starts_with(root) && path.as_bytes()[root.len()] == b'/'
}

/// Returns true if `path` is `root` itself or strictly below it.
pub fn is_within(path: &str, root: &str) -> bool {
	path == root || is_strict_sub_path(path, root)
}
