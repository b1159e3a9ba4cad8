//! Inventory search filter.

use crate::item::InventoryItem;

/// Items whose name, category or serial number contains `term`, ignoring case.
///
/// Insertion order is preserved. An empty term matches every item.
pub fn filter_items<'a>(items: &'a [InventoryItem], term: &str) -> Vec<&'a InventoryItem> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}
