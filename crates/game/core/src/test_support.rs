//! Stub oracles and item fixtures shared by unit tests.

use crate::env::{ItemOracle, RngOracle};
use crate::state::{Inventory, Item, ItemHandle, ItemKind, Player, Shop};

pub fn potion() -> Item {
    Item::new(ItemHandle(1), "Health Potion", ItemKind::Potion, 5, 30, "Restores 30 health")
}

pub fn sword() -> Item {
    Item::new(ItemHandle(2), "Sword", ItemKind::Weapon, 10, 10, "A basic sword")
}

pub fn steel_sword() -> Item {
    Item::new(ItemHandle(3), "Steel Sword", ItemKind::Weapon, 20, 18, "A sharp steel blade")
}

pub fn wooden_shield() -> Item {
    Item::new(ItemHandle(4), "Wooden Shield", ItemKind::Armor, 8, 5, "Light protection")
}

pub fn iron_shield() -> Item {
    Item::new(ItemHandle(5), "Iron Shield", ItemKind::Armor, 15, 12, "Sturdy protection")
}

pub fn player_with(items: Vec<Item>) -> Player {
    Player::default().with_inventory(Inventory::new(items))
}

/// The five canonical items.
pub struct TestCatalog;

impl ItemOracle for TestCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<Item> {
        self.all_definitions()
            .into_iter()
            .find(|item| item.handle == handle)
    }

    fn stock(&self, shop: Shop) -> Vec<ItemHandle> {
        match shop {
            Shop::Blacksmith => vec![ItemHandle(2), ItemHandle(3), ItemHandle(4), ItemHandle(5)],
            Shop::Market => vec![ItemHandle(1)],
        }
    }

    fn all_definitions(&self) -> Vec<Item> {
        vec![potion(), sword(), steel_sword(), wooden_shield(), iron_shield()]
    }
}

/// Rolls the same d100 value every time.
pub struct FixedRng(u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// `roll` must be in `1..=100`.
pub fn fixed_rng(roll: u32) -> FixedRng {
    FixedRng(roll - 1)
}
