//! Dashboard filtering over an in-memory item collection.
//!
//! # Responsibility
//! - Narrow a loaded collection by free text and status facet for display.
//!
//! # Invariants
//! - Filtering is a stable pass: input order is preserved, nothing is
//!   re-sorted.
//! - Status refresh happens before this layer; the filter trusts the
//!   statuses it is given.

use crate::model::item::{ItemStatus, WardrobeItem};

/// Discrete status dimension for dashboard queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFacet {
    /// No status filtering at all.
    #[default]
    All,
    Available,
    Unavailable,
    RarelyUsed,
}

impl StatusFacet {
    fn matches(self, status: ItemStatus) -> bool {
        match self {
            Self::All => true,
            Self::Available => status == ItemStatus::Available,
            Self::Unavailable => status == ItemStatus::Unavailable,
            Self::RarelyUsed => status == ItemStatus::RarelyUsed,
        }
    }
}

/// Filters items by free text and status facet.
///
/// # Contract
/// - Text match is a case-insensitive substring test against `name` OR
///   `category`; empty text matches everything.
/// - Both conditions must hold (logical AND).
/// - Returns matches in input order.
pub fn filter_items(
    items: &[WardrobeItem],
    search_text: &str,
    facet: StatusFacet,
) -> Vec<WardrobeItem> {
    let needle = search_text.to_lowercase();

    items
        .iter()
        .filter(|item| {
            let text_match = needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category.to_lowercase().contains(&needle);
            text_match && facet.matches(item.status)
        })
        .cloned()
        .collect()
}
