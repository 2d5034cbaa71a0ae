//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DRAGON_QUEST_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `DRAGON_QUEST_SHOW_ROUNDS` - Print every combat round (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("DRAGON_QUEST_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(show) = read_env_bool("DRAGON_QUEST_SHOW_ROUNDS") {
            config.messages.show_combat_rounds = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    /// Print each strike and enemy hit. When off, only the fight summary is
    /// shown.
    pub show_combat_rounds: bool,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            show_combat_rounds: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

/// Accepts the usual spellings of a boolean switch.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
