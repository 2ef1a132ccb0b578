/// Visibility query for a filter bar's natural on-page position.
///
/// The registry never touches platform handles; the rendering layer supplies
/// whatever implementation it has (an intersection observer, a layout query,
/// a test stub). The core only ever asks "is the original placement still on
/// screen".
pub trait AnchorVisibility: Send + Sync {
	/// Returns true while the filter's natural placement is visible.
	fn is_visible(&self) -> bool;
}

impl std::fmt::Debug for dyn AnchorVisibility {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AnchorVisibility")
			.field("visible", &self.is_visible())
			.finish()
	}
}
