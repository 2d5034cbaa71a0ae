//! Deterministic rules for The Dragon's Quest.
//!
//! `game-core` defines the canonical rules (locations, shops, items, combat)
//! and exposes pure APIs that the presentation layer drives. All state
//! mutation flows through [`engine::GameEngine`]; nothing in this crate
//! performs I/O.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

#[cfg(test)]
mod test_support;

pub use action::{
    Action, ActionTransition, BuyAction, ConfirmAction, EngageAction, EngageError, GameEvent,
    HelpAction, ItemUse, Purchase, QuitAction, ShopError, StatusAction, StatusReport,
    TravelAction, TravelError, UseItemAction, UseItemError,
};
pub use combat::{
    CombatOutcome, CombatPhase, CombatReport, CombatRound, EnemyHit, Encounter, EncounterKind,
    Loadout, RetreatReason,
};
pub use config::{EncounterRules, GameConfig, GearRules, Handicap, LootRules, PlayerRules};
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{ConfigOracle, Env, GameEnv, ItemOracle, OracleError, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GameState, GameStatus, Inventory, Item, ItemHandle, ItemKind, Location, LocationMenu,
    MenuAction, MenuEntry, MenuError, PendingDecision, Player, Shop,
};
