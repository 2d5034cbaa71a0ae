//! Content factory for building the catalog and rule set from data files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, ensure};
use game_core::{GameConfig, ItemKind, Shop};

use crate::catalog::ItemCatalog;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Everything a session needs from content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub catalog: ItemCatalog,
    pub config: GameConfig,
}

impl ContentBundle {
    /// Built-in catalog and canonical rules.
    pub fn builtin() -> Self {
        Self {
            catalog: ItemCatalog::builtin(),
            config: GameConfig::default(),
        }
    }

    /// Cross-checks the catalog against itself and against the rules.
    ///
    /// # Errors
    ///
    /// Fails on duplicate handles, shop stock pointing at unknown items, zero
    /// effects, or a loot/top-tier handle that is missing or of the wrong kind.
    /// The rules must start the player alive and give every encounter health.
    pub fn validate(&self) -> LoadResult<()> {
        let catalog = &self.catalog;

        let mut seen = HashSet::new();
        for item in &catalog.items {
            ensure!(
                seen.insert(item.handle),
                "Duplicate item handle {} ({})",
                item.handle,
                item.name
            );
            ensure!(item.effect > 0, "Item {} has no effect", item.name);
        }

        for shop in [Shop::Blacksmith, Shop::Market] {
            for handle in catalog.shops.get(shop) {
                ensure!(
                    catalog.get(*handle).is_some(),
                    "The {shop} stocks unknown item {handle}"
                );
            }
        }

        let loot = self.config.loot.item;
        match catalog.get(loot) {
            Some(item) if item.is(ItemKind::Potion) => {}
            Some(item) => bail!("Loot item {} is not a potion", item.name),
            None => bail!("Loot item {loot} is not in the catalog"),
        }

        let weapon = self.config.gear.top_tier_weapon;
        match catalog.get(weapon) {
            Some(item) if item.is(ItemKind::Weapon) => {}
            Some(item) => bail!("Top-tier weapon {} is not a weapon", item.name),
            None => bail!("Top-tier weapon {weapon} is not in the catalog"),
        }

        let starting_health = self.config.player.starting_health;
        ensure!(
            (1..=GameConfig::MAX_HEALTH).contains(&starting_health),
            "Starting health {starting_health} is outside 1..={}",
            GameConfig::MAX_HEALTH
        );

        for encounter in [&self.config.monster, &self.config.dragon] {
            ensure!(
                encounter.health > 0,
                "Encounter {} has no health",
                encounter.name
            );
        }

        ensure!(
            self.config.loot.drop_chance_percent <= 100,
            "Drop chance {}% is above 100%",
            self.config.loot.drop_chance_percent
        );

        Ok(())
    }
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Content factory that combines built-in content with optional overrides.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── items.ron
/// ```
///
/// Either file may be missing; the built-in value is used instead.
#[derive(Clone, Debug, Default)]
pub struct ContentFactory {
    items_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl ContentFactory {
    /// A factory with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up `items.ron` and `config.toml` from `data_dir` when they exist.
    pub fn from_data_dir(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let existing = |name: &str| Some(data_dir.join(name)).filter(|path| path.is_file());

        Self {
            items_path: existing("items.ron"),
            config_path: existing("config.toml"),
        }
    }

    pub fn with_items(mut self, path: impl Into<PathBuf>) -> Self {
        self.items_path = Some(path.into());
        self
    }

    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn items_path(&self) -> Option<&Path> {
        self.items_path.as_deref()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Load the item catalog, or the built-in one without an override.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        match &self.items_path {
            Some(path) => ItemLoader::load(path),
            None => Ok(ItemCatalog::builtin()),
        }
    }

    /// Load the rule set, or the canonical one without an override.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match &self.config_path {
            Some(path) => ConfigLoader::load(path),
            None => Ok(GameConfig::default()),
        }
    }

    /// Loads and validates the full bundle.
    pub fn load(&self) -> LoadResult<ContentBundle> {
        let bundle = ContentBundle {
            catalog: self.load_items()?,
            config: self.load_config()?,
        };
        bundle.validate()?;
        Ok(bundle)
    }
}
