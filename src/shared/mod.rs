pub mod geo;

pub use geo::*;

use std::sync::Arc;

/// Stop or route identifier shared between lookups without copying.
pub type Id = Arc<str>;

/// Treats empty and whitespace-only strings as missing.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
