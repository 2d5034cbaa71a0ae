//! Inventory system for the player.
//!
//! Owned item copies in insertion order, plus the equipment selector used at
//! the start of every fight.

use super::{Item, ItemHandle, ItemKind};

/// Ordered collection of owned items. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Appends a copy at the end (display order).
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn items_of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.is(kind))
    }

    pub fn contains(&self, handle: ItemHandle) -> bool {
        self.items.iter().any(|item| item.handle == handle)
    }

    /// Returns the item of `kind` with the largest effect.
    ///
    /// Ties go to the earliest item in insertion order.
    pub fn best_of(&self, kind: ItemKind) -> Option<&Item> {
        self.items_of_kind(kind)
            .fold(None, |best: Option<&Item>, item| match best {
                Some(current) if current.effect >= item.effect => Some(current),
                _ => Some(item),
            })
    }

    /// Gating predicate for the dragon: the top-tier weapon plus any armor.
    pub fn has_good_equipment(&self, top_tier_weapon: ItemHandle) -> bool {
        self.contains(top_tier_weapon) && self.items_of_kind(ItemKind::Armor).next().is_some()
    }
}
