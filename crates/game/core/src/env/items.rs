//! Item catalog oracle.

use crate::state::{Item, ItemHandle, Shop};

/// Read-only view of the item catalog.
///
/// Shops sell what [`stock`](ItemOracle::stock) lists, in that order. Purchases
/// and loot drops copy the template returned by
/// [`definition`](ItemOracle::definition).
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<Item>;

    /// Handles sold by `shop`, in display order.
    fn stock(&self, shop: Shop) -> Vec<ItemHandle>;

    /// Returns all item definitions available in this oracle.
    fn all_definitions(&self) -> Vec<Item>;

    /// Resolves a 1-based shop entry to its template.
    fn stock_entry(&self, shop: Shop, entry: usize) -> Option<Item> {
        let handle = *self.stock(shop).get(entry.checked_sub(1)?)?;
        self.definition(handle)
    }
}
