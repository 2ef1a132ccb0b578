//! Application shell for the documentation site.
//!
//! The shell is the single creation point for the site core's process-wide
//! state: the navigation-history provider, the sticky filter slot, and the
//! content search index. The hosting router constructs one [`AppShell`] at
//! startup, feeds it route transitions and nav-entry activations, and hands
//! pages and chrome the accessors they need. Dropping the shell tears
//! everything down; history handles that outlive it fail fast on use.

use indexmap::IndexMap;
use origin_navigation::HistoryProvider;
use origin_primitives::ContentKind;
use origin_search::group_by_kind;

pub use origin_navigation::{HistoryHandle, SectionTable, TabAction};
pub use origin_registry::{AnchorVisibility, FilterBarGuard, StickyFilterRegistry};
pub use origin_search::{SearchIndex, SearchRecord, Segment, SegmentKind, highlight};

/// Process-wide site state, generic over the filter-bar content type the
/// rendering layer uses.
pub struct AppShell<C> {
	history: HistoryProvider,
	filter_bar: StickyFilterRegistry<C>,
	index: SearchIndex,
}

impl<C> AppShell<C> {
	/// Builds the shell from the router's section table and the pre-built
	/// search index.
	pub fn new(sections: SectionTable, index: SearchIndex) -> Self {
		tracing::debug!(
			sections = sections.roots().len(),
			records = index.len(),
			"shell.start"
		);
		Self {
			history: HistoryProvider::new(sections),
			filter_bar: StickyFilterRegistry::new(),
			index,
		}
	}

	/// Observes a route transition from the router.
	pub fn route_changed(&self, current: &str) {
		self.history.on_route_changed(current);
	}

	/// Resolves a click on a section's top-level nav entry.
	pub fn tab_clicked(&self, section_root: &str, current: &str) -> TabAction {
		self.history.handle_tab_click(section_root, current)
	}

	/// Returns the link target for a section's nav entry.
	pub fn section_link(&self, section_root: &str) -> String {
		self.history.last_path(section_root)
	}

	/// Hands a history handle to chrome components. The handle panics if
	/// used after the shell is dropped.
	pub fn history(&self) -> HistoryHandle {
		self.history.handle()
	}

	/// The shared filter-bar slot; pages register into it, the chrome reads
	/// from it.
	pub fn filter_bar(&self) -> StickyFilterRegistry<C> {
		self.filter_bar.clone()
	}

	/// Evaluates a search query against the content index.
	pub fn search(&self, query: &str) -> Vec<&SearchRecord> {
		self.index.search(query)
	}

	/// Evaluates a query and partitions the hits into category buckets.
	pub fn grouped_search(&self, query: &str) -> IndexMap<ContentKind, Vec<&SearchRecord>> {
		group_by_kind(&self.index.search(query))
	}

	/// The underlying content index.
	pub fn index(&self) -> &SearchIndex {
		&self.index
	}
}

impl<C> Drop for AppShell<C> {
	fn drop(&mut self) {
		tracing::debug!("shell.teardown");
	}
}
