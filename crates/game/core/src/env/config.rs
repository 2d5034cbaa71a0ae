//! Configuration oracle for exposing the rule set to the engine.

use crate::config::GameConfig;

/// Provides access to the active rule set.
pub trait ConfigOracle: Send + Sync {
    fn rules(&self) -> &GameConfig;
}

impl ConfigOracle for GameConfig {
    fn rules(&self) -> &GameConfig {
        self
    }
}
