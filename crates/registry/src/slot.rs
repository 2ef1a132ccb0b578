use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::anchor::AnchorVisibility;

struct Registration<C> {
	generation: u64,
	anchor: Arc<dyn AnchorVisibility>,
	content: C,
}

struct Slot<C> {
	next_generation: u64,
	active: Option<Registration<C>>,
}

/// The process-wide sticky filter slot.
///
/// At most one registration is active; registering replaces whatever was
/// there. Cloning the registry clones a handle to the same slot, so the
/// shell can hand one side to pages and the other to the chrome.
pub struct StickyFilterRegistry<C> {
	slot: Arc<RwLock<Slot<C>>>,
}

impl<C> Clone for StickyFilterRegistry<C> {
	fn clone(&self) -> Self {
		Self {
			slot: Arc::clone(&self.slot),
		}
	}
}

impl<C> Default for StickyFilterRegistry<C> {
	fn default() -> Self {
		Self::new()
	}
}

impl<C> StickyFilterRegistry<C> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			slot: Arc::new(RwLock::new(Slot {
				next_generation: 0,
				active: None,
			})),
		}
	}

	/// Registers a filter bar, replacing any active registration.
	///
	/// The returned guard releases the slot when dropped, but only if this
	/// registration is still the active one — a guard outliving its
	/// replacement is inert.
	pub fn register(&self, anchor: Arc<dyn AnchorVisibility>, content: C) -> FilterBarGuard<C> {
		let mut slot = self.slot.write();
		let generation = slot.next_generation;
		slot.next_generation += 1;
		let replaced = slot.active.is_some();
		slot.active = Some(Registration {
			generation,
			anchor,
			content,
		});
		tracing::debug!(generation, replaced, "filter_bar.register");
		FilterBarGuard {
			slot: Arc::downgrade(&self.slot),
			generation,
		}
	}

	/// Clears the slot unconditionally. Idempotent.
	pub fn clear(&self) {
		let mut slot = self.slot.write();
		if slot.active.take().is_some() {
			tracing::debug!("filter_bar.clear");
		}
	}

	/// Returns true while a registration is active.
	pub fn is_registered(&self) -> bool {
		self.slot.read().active.is_some()
	}

	/// Returns true when the chrome should mirror the filter bar: a filter
	/// is registered and its on-page anchor has scrolled out of view.
	pub fn should_mirror(&self) -> bool {
		let slot = self.slot.read();
		slot.active
			.as_ref()
			.is_some_and(|reg| !reg.anchor.is_visible())
	}
}

impl<C: Clone> StickyFilterRegistry<C> {
	/// Snapshot of the active registration for the chrome to render.
	pub fn active(&self) -> Option<ActiveFilterBar<C>> {
		let slot = self.slot.read();
		slot.active.as_ref().map(|reg| ActiveFilterBar {
			anchor: Arc::clone(&reg.anchor),
			content: reg.content.clone(),
		})
	}
}

/// A snapshot of the registered filter bar.
#[derive(Clone)]
pub struct ActiveFilterBar<C> {
	anchor: Arc<dyn AnchorVisibility>,
	content: C,
}

impl<C> ActiveFilterBar<C> {
	/// The renderable content the owning page registered.
	pub fn content(&self) -> &C {
		&self.content
	}

	/// Whether the filter's natural placement is currently visible.
	pub fn anchor_visible(&self) -> bool {
		self.anchor.is_visible()
	}
}

/// Scoped release for a filter-bar registration.
///
/// Dropping the guard clears the slot if and only if the guard's
/// registration is still active. Pages hold this for as long as they are
/// mounted; unmounting drops it and the chrome slot empties without any
/// explicit call.
#[must_use = "dropping the guard releases the filter bar registration"]
pub struct FilterBarGuard<C> {
	slot: Weak<RwLock<Slot<C>>>,
	generation: u64,
}

impl<C> FilterBarGuard<C> {
	/// Releases the registration now instead of at end of scope.
	pub fn release(self) {}
}

impl<C> Drop for FilterBarGuard<C> {
	fn drop(&mut self) {
		let Some(slot) = self.slot.upgrade() else {
			return;
		};
		let mut slot = slot.write();
		let owns = slot
			.active
			.as_ref()
			.is_some_and(|reg| reg.generation == self.generation);
		if owns {
			tracing::debug!(generation = self.generation, "filter_bar.release");
			slot.active = None;
		} else {
			tracing::trace!(generation = self.generation, "filter_bar.release_stale");
		}
	}
}

impl<C> std::fmt::Debug for FilterBarGuard<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FilterBarGuard")
			.field("generation", &self.generation)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicBool, Ordering};

	use super::*;

	/// Togglable anchor standing in for the chrome's visibility probe.
	struct TestAnchor(AtomicBool);

	impl TestAnchor {
		fn visible() -> Arc<Self> {
			Arc::new(Self(AtomicBool::new(true)))
		}

		fn scroll_past(&self) {
			self.0.store(false, Ordering::Relaxed);
		}
	}

	impl AnchorVisibility for TestAnchor {
		fn is_visible(&self) -> bool {
			self.0.load(Ordering::Relaxed)
		}
	}

	#[test]
	fn register_then_read() {
		let registry = StickyFilterRegistry::new();
		let _guard = registry.register(TestAnchor::visible(), "status-filter");
		let active = registry.active().unwrap();
		assert_eq!(*active.content(), "status-filter");
		assert!(active.anchor_visible());
	}

	#[test]
	fn last_write_wins() {
		let registry = StickyFilterRegistry::new();
		let _first = registry.register(TestAnchor::visible(), "first");
		let _second = registry.register(TestAnchor::visible(), "second");
		assert_eq!(*registry.active().unwrap().content(), "second");
	}

	#[test]
	fn clear_is_idempotent() {
		let registry: StickyFilterRegistry<&str> = StickyFilterRegistry::new();
		registry.clear();
		registry.clear();
		assert!(!registry.is_registered());

		let guard = registry.register(TestAnchor::visible(), "filter");
		registry.clear();
		registry.clear();
		assert!(!registry.is_registered());
		drop(guard);
	}

	#[test]
	fn guard_drop_releases() {
		let registry = StickyFilterRegistry::new();
		let guard = registry.register(TestAnchor::visible(), "filter");
		assert!(registry.is_registered());
		drop(guard);
		assert!(!registry.is_registered());
	}

	#[test]
	fn stale_guard_drop_keeps_successor() {
		// Page A registers, page B replaces it, then A's guard finally
		// drops. B's registration must survive.
		let registry = StickyFilterRegistry::new();
		let first = registry.register(TestAnchor::visible(), "page-a");
		let _second = registry.register(TestAnchor::visible(), "page-b");
		drop(first);
		assert_eq!(*registry.active().unwrap().content(), "page-b");
	}

	#[test]
	fn explicit_release_clears() {
		let registry = StickyFilterRegistry::new();
		let guard = registry.register(TestAnchor::visible(), "filter");
		guard.release();
		assert!(registry.active().is_none());
	}

	#[test]
	fn mirrors_only_once_anchor_scrolls_out() {
		let registry = StickyFilterRegistry::new();
		assert!(!registry.should_mirror());

		let anchor = TestAnchor::visible();
		let _guard = registry.register(anchor.clone(), "filter");
		assert!(!registry.should_mirror());

		anchor.scroll_past();
		assert!(registry.should_mirror());
	}

	#[test]
	fn clones_share_the_slot() {
		let pages = StickyFilterRegistry::new();
		let chrome = pages.clone();
		let _guard = pages.register(TestAnchor::visible(), "filter");
		assert!(chrome.is_registered());
	}
}
