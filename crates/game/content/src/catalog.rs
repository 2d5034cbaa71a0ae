//! Built-in item catalog.
//!
//! The five items of the quest and the shop each one is sold in. Data files
//! loaded through [`ItemLoader`](crate::ItemLoader) replace this table
//! wholesale.

use game_core::{Item, ItemHandle, ItemKind, ItemOracle, Shop};

/// Which handles each shop sells, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopStock {
    pub blacksmith: Vec<ItemHandle>,
    pub market: Vec<ItemHandle>,
}

impl ShopStock {
    pub fn get(&self, shop: Shop) -> &[ItemHandle] {
        match shop {
            Shop::Blacksmith => &self.blacksmith,
            Shop::Market => &self.market,
        }
    }
}

/// Item templates plus shop stock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCatalog {
    pub items: Vec<Item>,
    pub shops: ShopStock,
}

impl ItemCatalog {
    pub const HEALTH_POTION: ItemHandle = ItemHandle(1);
    pub const SWORD: ItemHandle = ItemHandle(2);
    pub const STEEL_SWORD: ItemHandle = ItemHandle(3);
    pub const WOODEN_SHIELD: ItemHandle = ItemHandle(4);
    pub const IRON_SHIELD: ItemHandle = ItemHandle(5);

    pub fn new(items: Vec<Item>, shops: ShopStock) -> Self {
        Self { items, shops }
    }

    /// The canonical catalog.
    pub fn builtin() -> Self {
        let items = vec![
            Item::new(
                Self::HEALTH_POTION,
                "Health Potion",
                ItemKind::Potion,
                5,
                30,
                "Restores 30 health points",
            ),
            Item::new(
                Self::SWORD,
                "Sword",
                ItemKind::Weapon,
                10,
                10,
                "A sturdy blade for combat",
            ),
            Item::new(
                Self::STEEL_SWORD,
                "Steel Sword",
                ItemKind::Weapon,
                20,
                18,
                "A sharp steel sword with superior damage",
            ),
            Item::new(
                Self::WOODEN_SHIELD,
                "Wooden Shield",
                ItemKind::Armor,
                8,
                5,
                "Reduces damage taken in combat",
            ),
            Item::new(
                Self::IRON_SHIELD,
                "Iron Shield",
                ItemKind::Armor,
                15,
                12,
                "Heavy iron shield that greatly reduces incoming damage",
            ),
        ];

        let shops = ShopStock {
            blacksmith: vec![
                Self::SWORD,
                Self::STEEL_SWORD,
                Self::WOODEN_SHIELD,
                Self::IRON_SHIELD,
            ],
            market: vec![Self::HEALTH_POTION],
        };

        Self::new(items, shops)
    }

    pub fn get(&self, handle: ItemHandle) -> Option<&Item> {
        self.items.iter().find(|item| item.handle == handle)
    }

    /// Stock entries with their templates, skipping dangling handles.
    pub fn stock_items(&self, shop: Shop) -> impl Iterator<Item = &Item> {
        self.shops
            .get(shop)
            .iter()
            .filter_map(|handle| self.get(*handle))
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<Item> {
        self.get(handle).cloned()
    }

    fn stock(&self, shop: Shop) -> Vec<ItemHandle> {
        self.shops.get(shop).to_vec()
    }

    fn all_definitions(&self) -> Vec<Item> {
        self.items.clone()
    }
}
