//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and fields keep their defaults.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| e.context(format!("in config {}", path.display())))
    }

    /// Parse a GameConfig from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default_rule_set() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [player]
            starting_gold = 50

            [gear]
            require_gear_for_mountain = false
            "#,
        )
        .unwrap();

        assert_eq!(config.player.starting_gold, 50);
        assert_eq!(config.player.starting_health, 100);
        assert!(!config.gear.require_gear_for_mountain);
        assert_eq!(config.gear.top_tier_weapon, GameConfig::DEFAULT_TOP_TIER_WEAPON);
        assert_eq!(config.dragon.gold_reward, 100);
    }

    #[test]
    fn partial_encounter_tables_keep_their_own_defaults() {
        let config = ConfigLoader::parse("[monster]\nhealth = 30\n\n[dragon]\ngold_reward = 250\n")
            .unwrap();

        assert_eq!(config.monster.health, 30);
        assert_eq!(config.monster.name, "Forest Monster");
        assert_eq!(config.monster.damage_per_turn, 10);
        assert_eq!(config.monster.retreat_penalty, 20);

        assert_eq!(config.dragon.gold_reward, 250);
        assert_eq!(config.dragon.name, "Dragon");
        assert_eq!(config.dragon.health, 50);
        assert_eq!(config.dragon.retreat_penalty, 40);
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(ConfigLoader::parse("[player]\nstarting_gold = \"lots\"").is_err());
    }
}
