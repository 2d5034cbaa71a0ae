//! Loadout selection at combat start.

use crate::state::{Inventory, Item, ItemKind};

/// Gear picked automatically for one fight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
}

impl Loadout {
    /// Picks the strongest weapon and armor from the inventory.
    pub fn select(inventory: &Inventory) -> Self {
        Self {
            weapon: inventory.best_of(ItemKind::Weapon).cloned(),
            armor: inventory.best_of(ItemKind::Armor).cloned(),
        }
    }

    /// Damage dealt per strike, if armed.
    pub fn attack(&self) -> Option<u32> {
        self.weapon.as_ref().map(|weapon| weapon.effect)
    }

    /// Damage absorbed per enemy hit (0 without armor).
    pub fn protection(&self) -> u32 {
        self.armor.as_ref().map_or(0, |armor| armor.effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemHandle;

    #[test]
    fn select_takes_best_of_each_kind() {
        let inventory = Inventory::new(vec![
            Item::new(ItemHandle(2), "Sword", ItemKind::Weapon, 10, 10, ""),
            Item::new(ItemHandle(4), "Wooden Shield", ItemKind::Armor, 8, 5, ""),
            Item::new(ItemHandle(3), "Steel Sword", ItemKind::Weapon, 20, 18, ""),
        ]);

        let loadout = Loadout::select(&inventory);
        assert_eq!(loadout.attack(), Some(18));
        assert_eq!(loadout.protection(), 5);
    }

    #[test]
    fn empty_inventory_is_unarmed() {
        let loadout = Loadout::select(&Inventory::empty());
        assert_eq!(loadout.attack(), None);
        assert_eq!(loadout.protection(), 0);
    }
}
