use std::collections::HashMap;

use origin_primitives::{is_strict_sub_path, normalize};

use crate::section::SectionTable;

/// Outcome of activating a section's top-level nav entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
	/// Already at the section root: no navigation, scroll the page to top.
	Stay,
	/// Navigate to the given path.
	Navigate(String),
}

/// Per-section "last visited sub-path" memory.
///
/// A section has an entry only while the user has been strictly below its
/// root. Route changes record progress; the tab-click decision table decides
/// between resuming, resetting, and staying put.
#[derive(Debug)]
pub struct NavigationHistory {
	sections: SectionTable,
	last: HashMap<String, String>,
}

impl NavigationHistory {
	/// Creates an empty history over the given section table.
	pub fn new(sections: SectionTable) -> Self {
		Self {
			sections,
			last: HashMap::new(),
		}
	}

	/// Observes a route transition.
	///
	/// A strict sub-path of a tracked section overwrites that section's
	/// entry. Landing exactly on a section root is deliberately a no-op:
	/// only an explicit tab click clears history, so incidental root visits
	/// (typed URLs, external links) keep the resume point intact.
	pub fn on_route_changed(&mut self, current: &str) {
		let current = normalize(current);
		let Some(root) = self.sections.section_of(&current) else {
			return;
		};
		if is_strict_sub_path(&current, root) {
			tracing::debug!(section = root, path = %current, "route.changed");
			self.last.insert(root.to_string(), current);
		}
	}

	/// Returns where the section's nav entry should link: the stored
	/// sub-path if one exists, otherwise the root itself.
	pub fn last_path(&self, section_root: &str) -> String {
		let root = normalize(section_root);
		self.last.get(&root).cloned().unwrap_or(root)
	}

	/// Resolves a click on a section's nav entry while at `current`.
	///
	/// Decision table, in order:
	/// 1. already at the root → [`TabAction::Stay`] (scroll to top);
	/// 2. inside the section → clear the stored entry, go to the root;
	/// 3. elsewhere, with a stored entry below the root → resume it;
	/// 4. otherwise → go to the root.
	pub fn handle_tab_click(&mut self, section_root: &str, current: &str) -> TabAction {
		let root = normalize(section_root);
		let current = normalize(current);

		if current == root {
			tracing::debug!(section = %root, "tab.stay");
			return TabAction::Stay;
		}

		if is_strict_sub_path(&current, &root) {
			tracing::debug!(section = %root, from = %current, "tab.reset");
			self.last.remove(&root);
			return TabAction::Navigate(root);
		}

		if let Some(stored) = self.last.get(&root) {
			if stored != &root {
				tracing::debug!(section = %root, resume = %stored, "tab.resume");
				return TabAction::Navigate(stored.clone());
			}
		}

		TabAction::Navigate(root)
	}

	/// The section table the tracker was built over.
	pub fn sections(&self) -> &SectionTable {
		&self.sections
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn history() -> NavigationHistory {
		NavigationHistory::new(SectionTable::new(["/components", "/icons"]))
	}

	#[test]
	fn sub_path_visit_is_recorded() {
		let mut h = history();
		h.on_route_changed("/components/button");
		assert_eq!(h.last_path("/components"), "/components/button");
	}

	#[test]
	fn later_visit_overwrites() {
		let mut h = history();
		h.on_route_changed("/components/button");
		h.on_route_changed("/components/card");
		assert_eq!(h.last_path("/components"), "/components/card");
	}

	#[test]
	fn untracked_section_defaults_to_root() {
		let h = history();
		assert_eq!(h.last_path("/components"), "/components");
	}

	#[test]
	fn unrelated_route_is_ignored() {
		let mut h = history();
		h.on_route_changed("/about/team");
		assert_eq!(h.last_path("/components"), "/components");
	}

	#[test]
	fn root_route_change_does_not_clear() {
		// Only an explicit tab click clears; typing the root URL must not.
		let mut h = history();
		h.on_route_changed("/components/button");
		h.on_route_changed("/components");
		assert_eq!(h.last_path("/components"), "/components/button");
	}

	#[test]
	fn click_at_root_stays() {
		let mut h = history();
		h.on_route_changed("/components/button");
		assert_eq!(h.handle_tab_click("/components", "/components"), TabAction::Stay);
		// Staying never touches stored history.
		assert_eq!(h.last_path("/components"), "/components/button");
	}

	#[test]
	fn click_inside_section_backs_out_and_clears() {
		let mut h = history();
		h.on_route_changed("/components/button");
		assert_eq!(
			h.handle_tab_click("/components", "/components/button"),
			TabAction::Navigate("/components".to_string())
		);
		assert_eq!(h.last_path("/components"), "/components");
	}

	#[test]
	fn click_from_elsewhere_resumes() {
		let mut h = history();
		h.on_route_changed("/components/button");
		h.on_route_changed("/icons");
		assert_eq!(
			h.handle_tab_click("/components", "/icons"),
			TabAction::Navigate("/components/button".to_string())
		);
	}

	#[test]
	fn click_from_elsewhere_without_memory_goes_to_root() {
		let mut h = history();
		h.on_route_changed("/icons/arrow");
		assert_eq!(
			h.handle_tab_click("/components", "/icons/arrow"),
			TabAction::Navigate("/components".to_string())
		);
	}

	#[test]
	fn unnormalized_inputs_still_resolve() {
		let mut h = history();
		h.on_route_changed("/components/button/");
		assert_eq!(h.last_path("components"), "/components/button");
		assert_eq!(h.handle_tab_click("/components/", "/components"), TabAction::Stay);
	}
}
