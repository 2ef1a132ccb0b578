use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::history::{NavigationHistory, TabAction};
use crate::section::SectionTable;

/// Owning context for the navigation history.
///
/// Constructed once at application start and dropped at exit; every reader
/// goes through a [`HistoryHandle`]. Dropping the provider invalidates all
/// outstanding handles, which makes a leaked handle fail fast instead of
/// silently reading stale state.
#[derive(Debug)]
pub struct HistoryProvider {
	inner: Arc<RwLock<NavigationHistory>>,
}

impl HistoryProvider {
	/// Creates the provider over the router's section table.
	pub fn new(sections: SectionTable) -> Self {
		Self {
			inner: Arc::new(RwLock::new(NavigationHistory::new(sections))),
		}
	}

	/// Hands out a handle for chrome and page components.
	pub fn handle(&self) -> HistoryHandle {
		HistoryHandle {
			inner: Arc::downgrade(&self.inner),
		}
	}

	/// Observes a route transition.
	pub fn on_route_changed(&self, current: &str) {
		self.inner.write().on_route_changed(current);
	}

	/// Resolves a tab click. See [`NavigationHistory::handle_tab_click`].
	pub fn handle_tab_click(&self, section_root: &str, current: &str) -> TabAction {
		self.inner.write().handle_tab_click(section_root, current)
	}

	/// Returns the link target for a section's nav entry.
	pub fn last_path(&self, section_root: &str) -> String {
		self.inner.read().last_path(section_root)
	}
}

/// Weak handle to the navigation history.
///
/// Handles are cheap to clone and safe to stash in long-lived chrome
/// components; every access panics if the owning [`HistoryProvider`] is
/// gone, which is a programming error per the component contract.
#[derive(Debug, Clone)]
pub struct HistoryHandle {
	inner: Weak<RwLock<NavigationHistory>>,
}

impl HistoryHandle {
	fn with<R>(&self, f: impl FnOnce(&RwLock<NavigationHistory>) -> R) -> R {
		let Some(inner) = self.inner.upgrade() else {
			panic!("navigation history accessed outside its provider's lifetime");
		};
		f(&inner)
	}

	/// Observes a route transition.
	pub fn on_route_changed(&self, current: &str) {
		self.with(|lock| lock.write().on_route_changed(current));
	}

	/// Resolves a tab click. See [`NavigationHistory::handle_tab_click`].
	pub fn handle_tab_click(&self, section_root: &str, current: &str) -> TabAction {
		self.with(|lock| lock.write().handle_tab_click(section_root, current))
	}

	/// Returns the link target for a section's nav entry.
	pub fn last_path(&self, section_root: &str) -> String {
		self.with(|lock| lock.read().last_path(section_root))
	}
}
