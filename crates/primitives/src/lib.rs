//! Base types shared across the site core: route paths and content categories.

/// Closed set of searchable content categories.
pub mod kind;
/// Route-path normalization and containment helpers.
pub mod route;

pub use kind::{ContentKind, ParseContentKindError};
pub use route::{is_strict_sub_path, is_within, normalize};
