//! CLI-specific configuration for the terminal frontend.
use std::env;
use std::path::PathBuf;

use client_frontend_core::config::parse_bool;

/// CLI configuration.
///
/// This contains settings specific to the terminal binary, separate from
/// cross-frontend configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub content: ContentPaths,
    /// Fixed game seed; derived from the clock when absent.
    pub seed: Option<u64>,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DRAGON_QUEST_CONFIG` - TOML rule set override
    /// - `DRAGON_QUEST_ITEMS` - RON item catalog override
    /// - `DRAGON_QUEST_SEED` - Game seed (default: derived from the clock)
    /// - `DRAGON_QUEST_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `DRAGON_QUEST_COLOR` - Colored output (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.content.config_path = var("DRAGON_QUEST_CONFIG").map(PathBuf::from);
        config.content.items_path = var("DRAGON_QUEST_ITEMS").map(PathBuf::from);
        config.seed = var("DRAGON_QUEST_SEED").and_then(|raw| raw.trim().parse().ok());
        config.log_dir = var("DRAGON_QUEST_LOG_DIR").map(PathBuf::from);

        if let Some(color) = var("DRAGON_QUEST_COLOR").as_deref().and_then(parse_bool) {
            config.ui.color = color;
        }

        config
    }
}

/// Optional content overrides. Missing paths fall back to the built-in data.
#[derive(Clone, Debug, Default)]
pub struct ContentPaths {
    pub config_path: Option<PathBuf>,
    pub items_path: Option<PathBuf>,
}

/// Display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Use terminal colors for headers, warnings and banners.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CliConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);

        assert!(config.content.config_path.is_none());
        assert!(config.content.items_path.is_none());
        assert!(config.seed.is_none());
        assert!(config.ui.color);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("DRAGON_QUEST_CONFIG", "rules.toml"),
            ("DRAGON_QUEST_ITEMS", "items.ron"),
            ("DRAGON_QUEST_SEED", " 42 "),
            ("DRAGON_QUEST_LOG_DIR", "/tmp/dq"),
            ("DRAGON_QUEST_COLOR", "off"),
        ]);

        assert_eq!(config.content.config_path, Some(PathBuf::from("rules.toml")));
        assert_eq!(config.content.items_path, Some(PathBuf::from("items.ron")));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/dq")));
        assert!(!config.ui.color);
    }

    #[test]
    fn unreadable_values_are_ignored() {
        let config = config_from(&[("DRAGON_QUEST_SEED", "soon"), ("DRAGON_QUEST_COLOR", "blue")]);

        assert!(config.seed.is_none());
        assert!(config.ui.color);
    }
}
