//! Navigation-history tracking for the site's top-level sections.
//!
//! Each top-level section (components, icons, design, …) remembers the last
//! sub-path the user visited, so re-activating the section's nav entry
//! resumes there instead of resetting to the section index. An explicit
//! "back out to the root" gesture clears the memory for that section.
//!
//! State is owned by a [`HistoryProvider`] constructed once at application
//! start; chrome components hold [`HistoryHandle`]s. Using a handle after the
//! provider has been torn down is a programming error and panics.

/// Tracked state and the tab-click decision table.
mod history;
/// Provider/handle lifetime wrapper around the tracked state.
mod provider;
/// The fixed table of section roots handed in by the router.
mod section;

pub use history::{NavigationHistory, TabAction};
pub use provider::{HistoryHandle, HistoryProvider};
pub use section::SectionTable;
