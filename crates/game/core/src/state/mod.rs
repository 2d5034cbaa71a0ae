//! Authoritative game state representation.
//!
//! This module owns the session object that replaces loose global variables:
//! the player, the session status, and the one decision that can be left
//! open between two actions. Clients query this state but mutate it
//! exclusively through the engine.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    Inventory, Item, ItemHandle, ItemKind, Location, LocationMenu, MenuAction, MenuEntry,
    MenuError, Player, Shop,
};

use crate::config::GameConfig;

/// Where the session stands.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Running,
    /// The dragon is dead.
    Victory,
    /// Health reached zero.
    Defeat,
    /// The player left.
    Quit,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// A question the engine asked and the player has not answered yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PendingDecision {
    /// Fight the dragon without the top-tier weapon and armor?
    UnderequippedDragon,
}

/// Canonical snapshot of one play session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for the potion drop.
    ///
    /// Set once at session start and never modified. Combined with `nonce`
    /// to derive a fresh seed for each random event.
    pub game_seed: u64,

    /// Number of actions executed so far.
    pub nonce: u64,

    pub player: Player,
    pub status: GameStatus,
    pub pending: Option<PendingDecision>,
}

impl GameState {
    /// Creates a fresh session for `player`.
    pub fn new(game_seed: u64, player: Player) -> Self {
        Self {
            game_seed,
            nonce: 0,
            player,
            status: GameStatus::Running,
            pending: None,
        }
    }

    /// Creates a fresh adventurer named `name` using the configured starting values.
    pub fn start(game_seed: u64, name: &str, config: &GameConfig) -> Self {
        Self::new(game_seed, Player::new(name, &config.player))
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Checks the invariants every action must preserve.
    pub fn validate(&self) -> Result<(), StateError> {
        let health = self.player.health();
        if health > GameConfig::MAX_HEALTH {
            return Err(StateError::HealthOutOfRange { health });
        }

        if health == 0 && self.status == GameStatus::Running {
            return Err(StateError::DeadPlayerStillRunning {
                status: self.status,
            });
        }

        if self.pending.is_some() && self.player.location != Location::Mountain {
            return Err(StateError::PendingOutsideLair {
                location: self.player.location,
            });
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0, Player::default())
    }
}
