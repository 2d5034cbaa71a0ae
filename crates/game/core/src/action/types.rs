//! Core action result types.
//!
//! This module defines what the engine hands back to the presentation layer:
//! - `GameEvent`: One observable thing that happened during an action
//! - `Purchase`: A completed shop sale
//! - `ItemUse`: Outcome of using an inventory item
//! - `StatusReport`: Snapshot for the status screen

use crate::combat::CombatReport;
use crate::state::{GameState, Item, Location, Shop};

/// Observable outcome of an executed action, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    Travelled { from: Location, to: Location },
    Purchased(Purchase),
    ItemUsed(ItemUse),
    CombatResolved(CombatReport),
    /// The dragon warning; answer with [`ConfirmAction`](super::ConfirmAction).
    ConfirmationRequired { opponent: String },
    StatusReported(StatusReport),
    HelpRequested,
    Victory,
    Defeat,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Purchase {
    pub shop: Shop,
    /// The copy that went into the inventory.
    pub item: Item,
    pub gold_left: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemUse {
    /// A potion was drunk and removed from the inventory.
    Consumed {
        item: Item,
        healed: u32,
        health: u32,
    },
    /// Gear is picked automatically in combat; nothing changed.
    Equipped { item: Item },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusReport {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub gold: u32,
    pub location: Location,
    pub inventory: Vec<Item>,
}

impl StatusReport {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        Self {
            name: player.name.clone(),
            health: player.health(),
            max_health: crate::config::GameConfig::MAX_HEALTH,
            gold: player.gold,
            location: player.location,
            inventory: player.inventory.iter().cloned().collect(),
        }
    }
}
