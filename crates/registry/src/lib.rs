//! Sticky filter-bar registry.
//!
//! A page that owns an in-content filter control registers it here together
//! with an opaque visibility probe for its natural on-page anchor. The
//! persistent chrome reads the active registration and mirrors the content
//! once the anchor has scrolled out of view.
//!
//! The slot is process-wide and single: registration is last-write-wins, and
//! release is tied to the returned guard's lifetime rather than caller
//! discipline, so a page navigating away can never leak its filter bar into
//! the chrome. A replaced page's guard dropping late is also harmless — each
//! registration carries a generation token and a guard only clears the slot
//! it still owns.

/// Anchor-visibility capability implemented by the rendering chrome.
mod anchor;
/// The single registration slot and its RAII guard.
mod slot;

pub use anchor::AnchorVisibility;
pub use slot::{ActiveFilterBar, FilterBarGuard, StickyFilterRegistry};
